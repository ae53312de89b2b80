//! Repository for the `templates` table.
//!
//! Every query returns [`TemplateWithCategory`], joining the owning category's
//! display fields. Writes use a data-modifying CTE so the joined row comes
//! back in the same round-trip.

use sqlx::PgPool;
use outreach_core::types::DbId;

use crate::models::template::{
    CreateTemplate, NewGeneratedTemplate, TemplateWithCategory, UpdateTemplate,
};

/// Column list for template queries. Expects `templates` aliased as `t`
/// and `categories` aliased as `c`.
const COLUMNS: &str = "t.id, t.title, t.content, t.description, t.category_id, \
    c.name AS category_name, c.color AS category_color, c.icon AS category_icon, \
    t.is_favorite, t.usage_count, t.created_at, t.updated_at, t.tags, \
    t.is_ai_generated, t.ai_prompt";

/// Most recently touched first; `id` breaks ties between equal timestamps.
const ORDER_BY: &str = "ORDER BY t.updated_at DESC, t.id DESC";

/// Provides CRUD and filtered queries for message templates.
pub struct TemplateRepo;

impl TemplateRepo {
    /// List every template.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates t
             JOIN categories c ON c.id = t.category_id
             {ORDER_BY}"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a template by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates t
             JOIN categories c ON c.id = t.category_id
             WHERE t.id = $1"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the templates belonging to one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates t
             JOIN categories c ON c.id = t.category_id
             WHERE t.category_id = $1
             {ORDER_BY}"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List templates flagged as favorites.
    pub async fn list_favorites(
        pool: &PgPool,
    ) -> Result<Vec<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates t
             JOIN categories c ON c.id = t.category_id
             WHERE t.is_favorite
             {ORDER_BY}"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-sensitive literal substring search across title, content,
    /// description, and tags.
    ///
    /// Uses `strpos` rather than `LIKE` so `%` and `_` in the term match
    /// themselves. Null description/tags never match.
    pub async fn search(
        pool: &PgPool,
        term: &str,
    ) -> Result<Vec<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM templates t
             JOIN categories c ON c.id = t.category_id
             WHERE strpos(t.title, $1) > 0
                OR strpos(t.content, $1) > 0
                OR strpos(COALESCE(t.description, ''), $1) > 0
                OR strpos(COALESCE(t.tags, ''), $1) > 0
             {ORDER_BY}"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(term)
            .fetch_all(pool)
            .await
    }

    /// Insert a hand-written template. `created_at` and `updated_at` share
    /// the same `now()`; `usage_count` starts at zero.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTemplate,
    ) -> Result<TemplateWithCategory, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                INSERT INTO templates
                    (title, content, description, category_id, tags, is_favorite)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.tags)
            .bind(input.is_favorite)
            .fetch_one(pool)
            .await
    }

    /// Insert an AI-generated template. `is_ai_generated` is fixed to true.
    pub async fn create_generated(
        pool: &PgPool,
        input: &NewGeneratedTemplate,
    ) -> Result<TemplateWithCategory, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                INSERT INTO templates
                    (title, content, description, category_id, is_ai_generated, ai_prompt)
                VALUES ($1, $2, $3, $4, true, $5)
                RETURNING *
             )
             SELECT {COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(&input.ai_prompt)
            .fetch_one(pool)
            .await
    }

    /// Replace the writable fields of a template and refresh `updated_at`.
    /// Returns `None` if the template does not exist.
    ///
    /// `is_ai_generated`, `ai_prompt`, `usage_count`, and `created_at` are
    /// never touched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTemplate,
    ) -> Result<Option<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE templates SET
                    title       = $2,
                    content     = $3,
                    description = $4,
                    category_id = $5,
                    is_favorite = $6,
                    tags        = $7,
                    updated_at  = now()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.description)
            .bind(input.category_id)
            .bind(input.is_favorite)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a template by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Increment `usage_count` by one and refresh `updated_at`.
    /// Returns `None` if the template does not exist.
    pub async fn increment_usage(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TemplateWithCategory>, sqlx::Error> {
        let query = format!(
            "WITH t AS (
                UPDATE templates SET
                    usage_count = usage_count + 1,
                    updated_at  = now()
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM t
             JOIN categories c ON c.id = t.category_id"
        );
        sqlx::query_as::<_, TemplateWithCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether any template still references the given category.
    pub async fn exists_for_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM templates WHERE category_id = $1)",
        )
        .bind(category_id)
        .fetch_one(pool)
        .await
    }
}
