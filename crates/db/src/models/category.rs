//! Template category models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use outreach_core::types::{DbId, Timestamp};

use crate::models::status::StatusId;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `categories` table annotated with its live template count.
///
/// `is_active` is derived from `status_id` in SQL so clients that only know
/// the boolean flag keep working.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub status_id: StatusId,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub template_count: i64,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// DTO for creating a new category. Color and icon fall back to defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

// ---------------------------------------------------------------------------
// Update DTO
// ---------------------------------------------------------------------------

/// DTO for updating a category. Every writable field is replaced.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: String,
    pub description: Option<String>,
    pub color: String,
    pub icon: String,
    pub is_active: bool,
}
