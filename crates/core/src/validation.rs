//! Field-level checks shared by the template, category, and generation rules.
//!
//! Lengths are measured in characters, not bytes, to agree with how Postgres
//! enforces `VARCHAR(n)`.

use crate::error::CoreError;

/// Reject an empty or whitespace-only value.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Reject a value longer than `max` characters.
pub fn check_max_chars(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

/// Apply [`check_max_chars`] to an optional value. `None` always passes.
pub fn check_optional_max_chars(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> Result<(), CoreError> {
    match value {
        Some(v) => check_max_chars(field, v, max),
        None => Ok(()),
    }
}
