use std::fmt;

/// Chat-completion endpoint used when `OPENAI_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when `OPENAI_MODEL` is unset.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for the external text-generation API.
///
/// Built once at startup and handed to [`crate::OpenAiGenerator::new`].
/// Without an API key every generation request goes straight to the
/// fallback path.
#[derive(Clone)]
pub struct AiConfig {
    /// Bearer credential. `None` disables outbound calls.
    pub api_key: Option<String>,
    /// Full URL of the chat-completions endpoint.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl AiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                                        |
    /// |------------------|------------------------------------------------|
    /// | `OPENAI_API_KEY` | unset (fallback only)                          |
    /// | `OPENAI_API_URL` | `https://api.openai.com/v1/chat/completions`   |
    /// | `OPENAI_MODEL`   | `gpt-3.5-turbo`                                |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_url =
            std::env::var("OPENAI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            api_url,
            model,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

// The key must never reach logs.
impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("model", &self.model)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_key() {
        let config = AiConfig {
            api_key: Some("sk-secret".to_string()),
            ..AiConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn default_has_no_key() {
        let config = AiConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }
}
