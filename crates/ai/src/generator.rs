//! Fallback-first text generation.
//!
//! [`TemplateTextGenerator`] is the seam the template service depends on.
//! [`OpenAiGenerator`] backs it with [`ChatCompletionApi`] and swallows every
//! failure by substituting the deterministic output from [`crate::fallback`].

use async_trait::async_trait;

use crate::api::ChatCompletionApi;
use crate::config::AiConfig;
use crate::fallback::{fallback_ideas, fallback_template};
use crate::prompts::{
    ideas_user_prompt, template_user_prompt, IDEAS_PARAMS, IDEAS_SYSTEM_PROMPT,
    TEMPLATE_PARAMS, TEMPLATE_SYSTEM_PROMPT,
};

/// Produces template text and idea lists. Implementations must not fail:
/// any upstream problem is replaced by a usable value.
#[async_trait]
pub trait TemplateTextGenerator: Send + Sync {
    /// Draft message text for `prompt`, optionally informed by `context`.
    async fn generate_template_text(
        &self,
        prompt: &str,
        context: Option<&str>,
        tone: &str,
    ) -> String;

    /// Suggest short template ideas for a category.
    async fn generate_ideas(&self, category: &str, context: Option<&str>) -> Vec<String>;
}

/// [`TemplateTextGenerator`] backed by a hosted chat-completion API.
pub struct OpenAiGenerator {
    api: ChatCompletionApi,
}

impl OpenAiGenerator {
    pub fn new(config: &AiConfig) -> Self {
        Self {
            api: ChatCompletionApi::new(config),
        }
    }

    /// Build a generator around an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &AiConfig) -> Self {
        Self {
            api: ChatCompletionApi::with_client(client, config),
        }
    }
}

#[async_trait]
impl TemplateTextGenerator for OpenAiGenerator {
    async fn generate_template_text(
        &self,
        prompt: &str,
        context: Option<&str>,
        tone: &str,
    ) -> String {
        let user_prompt = template_user_prompt(prompt, context, tone);
        match self
            .api
            .complete(TEMPLATE_SYSTEM_PROMPT, &user_prompt, TEMPLATE_PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "Template generation failed, using fallback text");
                fallback_template(prompt)
            }
        }
    }

    async fn generate_ideas(&self, category: &str, context: Option<&str>) -> Vec<String> {
        let user_prompt = ideas_user_prompt(category, context);
        let content = match self
            .api
            .complete(IDEAS_SYSTEM_PROMPT, &user_prompt, IDEAS_PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(category, error = %e, "Idea generation failed, using fallback ideas");
                return fallback_ideas(category);
            }
        };

        parse_ideas(&content).unwrap_or_else(|| {
            tracing::warn!(category, "Idea response was not a JSON string array, using fallback ideas");
            fallback_ideas(category)
        })
    }
}

/// Parse a completion as a non-empty JSON array of non-blank strings.
///
/// Tolerates a surrounding Markdown code fence.
pub fn parse_ideas(content: &str) -> Option<Vec<String>> {
    let trimmed = content.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed);

    let ideas: Vec<String> = serde_json::from_str(unfenced.trim()).ok()?;
    let ideas: Vec<String> = ideas
        .into_iter()
        .map(|idea| idea.trim().to_string())
        .filter(|idea| !idea.is_empty())
        .collect();

    (!ideas.is_empty()).then_some(ideas)
}
