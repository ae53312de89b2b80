//! AI generation adapter for message templates.
//!
//! Wraps a hosted chat-completion API with a typed request/response schema
//! and pairs every call with a deterministic, offline fallback. Callers
//! interact through [`generator::TemplateTextGenerator`], whose methods
//! cannot fail.

pub mod api;
pub mod config;
pub mod fallback;
pub mod generator;
pub mod prompts;

pub use config::AiConfig;
pub use generator::{OpenAiGenerator, TemplateTextGenerator};
