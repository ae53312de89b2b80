//! REST client for a hosted chat-completion endpoint.
//!
//! Sends a system + user message pair and extracts the first completion's
//! text from a strictly-typed response. Any deviation from the expected
//! shape is reported as an error; deciding what to do about it is the
//! caller's job.

use serde::{Deserialize, Serialize};

use crate::config::AiConfig;

/// HTTP client for a single chat-completion endpoint.
pub struct ChatCompletionApi {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
}

/// Sampling parameters for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletionParams {
    pub max_tokens: u32,
    pub temperature: f32,
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// A single chat message in the request body.
#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Response body for `POST /chat/completions`. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

/// One completion alternative.
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

/// The assistant message inside a [`Choice`].
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if present and not blank.
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the chat-completion API layer.
#[derive(Debug, thiserror::Error)]
pub enum ChatApiError {
    /// No API key is configured, so no request was sent.
    #[error("No API key configured")]
    MissingCredential,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Completion API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response body did not match the expected schema.
    #[error("Malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response parsed but carried no usable completion text.
    #[error("Completion response contained no text")]
    EmptyCompletion,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

impl ChatCompletionApi {
    /// Create a new API client from configuration.
    ///
    /// Uses reqwest's default client settings; no explicit timeout is set.
    pub fn new(config: &AiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &AiConfig) -> Self {
        Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Issue one completion request and return the first choice's text.
    ///
    /// Never retries. A missing key short-circuits before any network I/O.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        params: CompletionParams,
    ) -> Result<String, ChatApiError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ChatApiError::MissingCredential)?;

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(ChatApiError::ApiError {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;
        parsed
            .into_first_content()
            .ok_or(ChatApiError::EmptyCompletion)
    }
}
