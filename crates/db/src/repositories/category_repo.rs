//! Repository for the `categories` table.

use sqlx::PgPool;
use outreach_core::category::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON};
use outreach_core::types::DbId;

use crate::models::category::{CategoryWithCount, CreateCategory, UpdateCategory};
use crate::models::status::CategoryStatus;

/// Column list for category queries. Expects `categories` aliased as `c`.
///
/// `status_id = 1` is [`CategoryStatus::Active`].
const COLUMNS: &str = "c.id, c.name, c.description, c.color, c.icon, c.status_id, \
    (c.status_id = 1) AS is_active, c.created_at, \
    (SELECT COUNT(*) FROM templates t WHERE t.category_id = c.id) AS template_count";

/// Provides CRUD operations for template categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List active categories, ordered by name ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<CategoryWithCount>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories c
             WHERE c.status_id = $1
             ORDER BY c.name ASC, c.id ASC"
        );
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(CategoryStatus::Active.id())
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID, whatever its status.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CategoryWithCount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories c WHERE c.id = $1");
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new active category, returning the created row.
    ///
    /// Missing color and icon are filled from the core defaults.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCategory,
    ) -> Result<CategoryWithCount, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                INSERT INTO categories (name, description, color, icon, status_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
             )
             SELECT {COLUMNS} FROM c"
        );
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.color.as_deref().unwrap_or(DEFAULT_CATEGORY_COLOR))
            .bind(input.icon.as_deref().unwrap_or(DEFAULT_CATEGORY_ICON))
            .bind(CategoryStatus::Active.id())
            .fetch_one(pool)
            .await
    }

    /// Replace every writable field of a category, returning the updated row.
    /// Returns `None` if the category does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<CategoryWithCount>, sqlx::Error> {
        let query = format!(
            "WITH c AS (
                UPDATE categories SET
                    name        = $2,
                    description = $3,
                    color       = $4,
                    icon        = $5,
                    status_id   = $6
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM c"
        );
        sqlx::query_as::<_, CategoryWithCount>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.color)
            .bind(&input.icon)
            .bind(CategoryStatus::from_active(input.is_active).id())
            .fetch_optional(pool)
            .await
    }

    /// Move a category to a new lifecycle status. Returns `true` if updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: CategoryStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE categories SET status_id = $2 WHERE id = $1")
            .bind(id)
            .bind(status.id())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a category by ID. Returns `true` if a row was deleted.
    ///
    /// Fails with a foreign key violation if templates still reference it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
