//! Message template field limits and validation.
//!
//! Templates carry literal placeholder tokens such as `[Name]` in their
//! content. Substitution happens in the browser at send time, so the rules
//! here only concern the stored fields.

use crate::error::CoreError;
use crate::validation::{check_max_chars, check_optional_max_chars, require_non_blank};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a template title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a template description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for the comma-separated tag string in characters.
pub const MAX_TAGS_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate the caller-writable fields of a template create or update.
///
/// `category_id` is deliberately absent: the foreign key constraint in the
/// store is the only referential check.
pub fn validate_template_fields(
    title: &str,
    content: &str,
    description: Option<&str>,
    tags: Option<&str>,
) -> Result<(), CoreError> {
    require_non_blank("Title", title)?;
    check_max_chars("Title", title, MAX_TITLE_LENGTH)?;
    require_non_blank("Content", content)?;
    check_optional_max_chars("Description", description, MAX_DESCRIPTION_LENGTH)?;
    check_optional_max_chars("Tags", tags, MAX_TAGS_LENGTH)?;
    Ok(())
}

/// Validate a free-text search term. Blank terms are rejected.
///
/// The term is matched as given; surrounding whitespace is not trimmed.
pub fn validate_search_term(term: &str) -> Result<(), CoreError> {
    if term.trim().is_empty() {
        return Err(CoreError::Validation(
            "Search query is required".to_string(),
        ));
    }
    Ok(())
}
