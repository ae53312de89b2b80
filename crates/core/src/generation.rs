//! Rules for AI-assisted template generation.
//!
//! Covers request validation and the title/description stamped onto a
//! generated template. The network call itself lives in `outreach-ai`.

use crate::error::CoreError;
use crate::validation::{check_max_chars, require_non_blank};

/// Tone used when the caller does not supply one.
pub const DEFAULT_TONE: &str = "Professional";

/// Category name used in descriptions when the requested category is unknown.
pub const FALLBACK_CATEGORY_NAME: &str = "General";

/// Maximum prompt length. The prompt is stored verbatim as `ai_prompt`.
pub const MAX_PROMPT_LENGTH: usize = 100;

/// Prefix of every generated template title.
pub const GENERATED_TITLE_PREFIX: &str = "AI Generated: ";

/// Validate a generation prompt: non-blank and within the stored length.
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    require_non_blank("Prompt", prompt)?;
    check_max_chars("Prompt", prompt, MAX_PROMPT_LENGTH)
}

/// Resolve the requested tone, falling back to [`DEFAULT_TONE`] when absent or blank.
pub fn resolve_tone(tone: Option<&str>) -> &str {
    match tone {
        Some(t) if !t.trim().is_empty() => t,
        _ => DEFAULT_TONE,
    }
}

/// Title stored on a generated template.
pub fn generated_title(prompt: &str) -> String {
    format!("{GENERATED_TITLE_PREFIX}{prompt}")
}

/// Description stored on a generated template.
pub fn generated_description(category_name: &str) -> String {
    format!("AI-generated template for {category_name}")
}
