//! Message template models and DTOs.
//!
//! Defines the joined row returned by every template query and the
//! create/update/generate request types used by the API layer.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use outreach_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A `templates` row joined with its owning category's display fields.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TemplateWithCategory {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub category_name: String,
    pub category_color: String,
    pub category_icon: String,
    pub is_favorite: bool,
    pub usage_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub tags: Option<String>,
    pub is_ai_generated: bool,
    pub ai_prompt: Option<String>,
}

// ---------------------------------------------------------------------------
// Create DTOs
// ---------------------------------------------------------------------------

/// Input for creating a template by hand.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTemplate {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub category_id: DbId,
    pub tags: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

/// A fully resolved AI-generated template ready to insert.
///
/// Built by the template service, never deserialized from a request.
#[derive(Debug, Clone)]
pub struct NewGeneratedTemplate {
    pub title: String,
    pub content: String,
    pub description: String,
    pub category_id: DbId,
    pub ai_prompt: String,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// Input for updating a template. Every writable field is replaced;
/// omitting `description` or `tags` clears them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTemplate {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub category_id: DbId,
    #[serde(default)]
    pub is_favorite: bool,
    pub tags: Option<String>,
}

// ---------------------------------------------------------------------------
// API request types
// ---------------------------------------------------------------------------

/// Request body for generating a template with the AI adapter.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTemplateRequest {
    pub prompt: String,
    pub category_id: DbId,
    pub context: Option<String>,
    pub tone: Option<String>,
}

/// Query parameters for `GET /templates/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Query parameters for `GET /templates/ideas`.
#[derive(Debug, Deserialize)]
pub struct IdeasParams {
    #[serde(default)]
    pub category: String,
    pub context: Option<String>,
}
