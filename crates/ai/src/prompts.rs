//! Prompt text and sampling parameters sent to the completion API.

use crate::api::CompletionParams;

/// System instruction fixing the output contract for template text.
pub const TEMPLATE_SYSTEM_PROMPT: &str = "You are a professional LinkedIn messaging expert. \
Generate high-quality, personalized LinkedIn message templates that are:
- Professional yet conversational
- Personalized and specific
- Under 200 words
- Include placeholders like [Name], [Company], [Role] for customization
- Follow LinkedIn best practices
- Avoid being overly salesy or pushy

Return only the message content, no additional formatting or explanations.";

/// System instruction for template idea lists. Asks for a bare JSON array.
pub const IDEAS_SYSTEM_PROMPT: &str = "You are a creative LinkedIn messaging strategist. \
Generate 5 creative and specific LinkedIn message template ideas for the given category. \
Each idea should be:
- Specific and actionable
- Professional
- Include the target audience
- Mention the goal/purpose

Return as a JSON array of strings, each string being a brief idea description.";

pub const TEMPLATE_PARAMS: CompletionParams = CompletionParams {
    max_tokens: 300,
    temperature: 0.7,
};

pub const IDEAS_PARAMS: CompletionParams = CompletionParams {
    max_tokens: 400,
    temperature: 0.8,
};

/// Build the user instruction for template text.
///
/// Context is appended only when present and non-blank; tone is always appended.
pub fn template_user_prompt(prompt: &str, context: Option<&str>, tone: &str) -> String {
    let mut text = format!("Generate a LinkedIn message template for: {prompt}");
    push_context(&mut text, context);
    text.push_str(&format!("\n\nTone: {tone}"));
    text
}

/// Build the user instruction for an idea list.
pub fn ideas_user_prompt(category: &str, context: Option<&str>) -> String {
    let mut text = format!("Generate 5 LinkedIn message template ideas for the category: {category}");
    push_context(&mut text, context);
    text
}

fn push_context(text: &mut String, context: Option<&str>) {
    if let Some(ctx) = context.filter(|c| !c.trim().is_empty()) {
        text.push_str(&format!("\n\nContext: {ctx}"));
    }
}
