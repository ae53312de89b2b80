//! Category use-cases, including the retire-instead-of-delete rule.

use outreach_core::category::{
    validate_category_fields, DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON,
};
use outreach_core::types::DbId;
use outreach_db::models::category::{CategoryWithCount, CreateCategory, UpdateCategory};
use outreach_db::models::status::CategoryStatus;
use outreach_db::repositories::{CategoryRepo, TemplateRepo};
use outreach_db::DbPool;

use crate::error::AppResult;
use crate::state::AppState;

/// How a successful category delete was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryRemoval {
    /// No template referenced the category; the row is gone.
    Deleted,
    /// Templates still reference the category; it was retired instead.
    Retired,
}

/// Orchestrates category operations over the store.
pub struct CategoryService<'a> {
    pool: &'a DbPool,
}

impl<'a> CategoryService<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.pool)
    }

    /// Active categories with live template counts, ordered by name.
    pub async fn list_active(&self) -> AppResult<Vec<CategoryWithCount>> {
        Ok(CategoryRepo::list_active(self.pool).await?)
    }

    /// A single category whatever its status.
    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<CategoryWithCount>> {
        Ok(CategoryRepo::find_by_id(self.pool, id).await?)
    }

    /// Create an active category, defaulting color and icon.
    pub async fn create(&self, input: &CreateCategory) -> AppResult<CategoryWithCount> {
        validate_category_fields(
            &input.name,
            input.description.as_deref(),
            input.color.as_deref().unwrap_or(DEFAULT_CATEGORY_COLOR),
            input.icon.as_deref().unwrap_or(DEFAULT_CATEGORY_ICON),
        )?;
        Ok(CategoryRepo::create(self.pool, input).await?)
    }

    /// Replace every writable field. `Ok(None)` when the category does not exist.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateCategory,
    ) -> AppResult<Option<CategoryWithCount>> {
        validate_category_fields(
            &input.name,
            input.description.as_deref(),
            &input.color,
            &input.icon,
        )?;
        Ok(CategoryRepo::update(self.pool, id, input).await?)
    }

    /// Delete a category, or retire it if templates still reference it.
    ///
    /// Returns `None` only when the category does not exist.
    pub async fn delete(&self, id: DbId) -> AppResult<Option<CategoryRemoval>> {
        if CategoryRepo::find_by_id(self.pool, id).await?.is_none() {
            return Ok(None);
        }

        if TemplateRepo::exists_for_category(self.pool, id).await? {
            CategoryRepo::set_status(self.pool, id, CategoryStatus::Retired).await?;
            return Ok(Some(CategoryRemoval::Retired));
        }

        // A concurrent delete between the lookup and here still counts as removed.
        CategoryRepo::delete(self.pool, id).await?;
        Ok(Some(CategoryRemoval::Deleted))
    }
}
