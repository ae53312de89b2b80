//! Category defaults, limits, and validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;
use crate::validation::{check_max_chars, check_optional_max_chars, require_non_blank};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Color assigned when a category is created without one (LinkedIn blue).
pub const DEFAULT_CATEGORY_COLOR: &str = "#0077B5";

/// Icon assigned when a category is created without one.
pub const DEFAULT_CATEGORY_ICON: &str = "💼";

/// Maximum length for a category name in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for a category description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for a category icon in characters.
pub const MAX_ICON_LENGTH: usize = 10;

/// `#RGB` or `#RRGGBB`.
pub const HEX_COLOR_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HEX_COLOR_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a hex display color.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    if !HEX_COLOR_RE.is_match(color) {
        return Err(CoreError::Validation(format!(
            "Color must be a hex value like #0077B5 (got '{color}')"
        )));
    }
    Ok(())
}

/// Validate the writable fields of a category create or update.
pub fn validate_category_fields(
    name: &str,
    description: Option<&str>,
    color: &str,
    icon: &str,
) -> Result<(), CoreError> {
    require_non_blank("Name", name)?;
    check_max_chars("Name", name, MAX_NAME_LENGTH)?;
    check_optional_max_chars("Description", description, MAX_DESCRIPTION_LENGTH)?;
    validate_color(color)?;
    require_non_blank("Icon", icon)?;
    check_max_chars("Icon", icon, MAX_ICON_LENGTH)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_themselves_valid() {
        assert!(validate_category_fields(
            "Networking",
            None,
            DEFAULT_CATEGORY_COLOR,
            DEFAULT_CATEGORY_ICON
        )
        .is_ok());
    }

    #[test]
    fn short_and_long_hex_accepted() {
        assert!(validate_color("#123456").is_ok());
        assert!(validate_color("#abc").is_ok());
        assert!(validate_color("#FfC107").is_ok());
    }

    #[test]
    fn malformed_colors_rejected() {
        for bad in ["", "0077B5", "#0077B", "#0077B5F", "#GGGGGG", "blue"] {
            assert!(validate_color(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }

    #[test]
    fn blank_name_rejected() {
        let err = validate_category_fields(" ", None, "#123456", "🧪").unwrap_err();
        assert!(err.to_string().contains("Name must not be empty"));
    }

    #[test]
    fn oversized_name_rejected() {
        let long = "n".repeat(MAX_NAME_LENGTH + 1);
        assert!(validate_category_fields(&long, None, "#123456", "🧪").is_err());
    }

    #[test]
    fn icon_limits_enforced() {
        assert!(validate_category_fields("Test", None, "#123456", "").is_err());
        let long = "x".repeat(MAX_ICON_LENGTH + 1);
        assert!(validate_category_fields("Test", None, "#123456", &long).is_err());
    }
}
