//! Template use-cases: CRUD, filtered listings, search, usage tracking, and
//! AI-assisted generation.
//!
//! This is the only writer of template rows and the only caller of the
//! [`TemplateTextGenerator`].

use outreach_ai::TemplateTextGenerator;
use outreach_core::error::CoreError;
use outreach_core::generation::{
    generated_description, generated_title, resolve_tone, validate_prompt,
    FALLBACK_CATEGORY_NAME,
};
use outreach_core::template::{validate_search_term, validate_template_fields};
use outreach_core::types::DbId;
use outreach_db::models::template::{
    CreateTemplate, GenerateTemplateRequest, NewGeneratedTemplate, TemplateWithCategory,
    UpdateTemplate,
};
use outreach_db::repositories::{CategoryRepo, TemplateRepo};
use outreach_db::DbPool;

use crate::error::AppResult;
use crate::state::AppState;

/// Orchestrates template operations over the store and the text generator.
pub struct TemplateService<'a> {
    pool: &'a DbPool,
    generator: &'a dyn TemplateTextGenerator,
}

impl<'a> TemplateService<'a> {
    pub fn new(pool: &'a DbPool, generator: &'a dyn TemplateTextGenerator) -> Self {
        Self { pool, generator }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(&state.pool, state.generator.as_ref())
    }

    /// All templates, most recently touched first.
    pub async fn list_all(&self) -> AppResult<Vec<TemplateWithCategory>> {
        Ok(TemplateRepo::list_all(self.pool).await?)
    }

    pub async fn get_by_id(&self, id: DbId) -> AppResult<Option<TemplateWithCategory>> {
        Ok(TemplateRepo::find_by_id(self.pool, id).await?)
    }

    /// Create a template. The category reference is checked by the store only.
    pub async fn create(&self, input: &CreateTemplate) -> AppResult<TemplateWithCategory> {
        validate_template_fields(
            &input.title,
            &input.content,
            input.description.as_deref(),
            input.tags.as_deref(),
        )?;
        Ok(TemplateRepo::create(self.pool, input).await?)
    }

    /// Replace a template's writable fields. `Ok(None)` when it does not exist.
    pub async fn update(
        &self,
        id: DbId,
        input: &UpdateTemplate,
    ) -> AppResult<Option<TemplateWithCategory>> {
        validate_template_fields(
            &input.title,
            &input.content,
            input.description.as_deref(),
            input.tags.as_deref(),
        )?;
        Ok(TemplateRepo::update(self.pool, id, input).await?)
    }

    /// Hard-delete a template. Returns whether a row existed.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        Ok(TemplateRepo::delete(self.pool, id).await?)
    }

    pub async fn list_by_category(
        &self,
        category_id: DbId,
    ) -> AppResult<Vec<TemplateWithCategory>> {
        Ok(TemplateRepo::list_by_category(self.pool, category_id).await?)
    }

    pub async fn list_favorites(&self) -> AppResult<Vec<TemplateWithCategory>> {
        Ok(TemplateRepo::list_favorites(self.pool).await?)
    }

    /// Case-sensitive substring search over title, content, description, and
    /// tags. Blank terms are rejected before the store is queried.
    pub async fn search(&self, term: &str) -> AppResult<Vec<TemplateWithCategory>> {
        validate_search_term(term)?;
        Ok(TemplateRepo::search(self.pool, term).await?)
    }

    /// Generate template text and persist it as a new AI-generated template.
    ///
    /// The generator cannot fail, so the only errors here are validation and
    /// store failures (including an unknown `category_id` at insert time).
    pub async fn generate(
        &self,
        request: &GenerateTemplateRequest,
    ) -> AppResult<TemplateWithCategory> {
        validate_prompt(&request.prompt)?;

        let category_name = CategoryRepo::find_by_id(self.pool, request.category_id)
            .await?
            .map(|c| c.name)
            .unwrap_or_else(|| FALLBACK_CATEGORY_NAME.to_string());

        let tone = resolve_tone(request.tone.as_deref());
        let content = self
            .generator
            .generate_template_text(&request.prompt, request.context.as_deref(), tone)
            .await;

        let new_template = NewGeneratedTemplate {
            title: generated_title(&request.prompt),
            content,
            description: generated_description(&category_name),
            category_id: request.category_id,
            ai_prompt: request.prompt.clone(),
        };

        Ok(TemplateRepo::create_generated(self.pool, &new_template).await?)
    }

    /// Count one use of a template.
    ///
    /// Unlike the other lookups, a missing template is an error
    /// ([`CoreError::NotFound`]) rather than an empty result. Every call is a
    /// fresh increment; there is no per-session deduplication.
    pub async fn record_usage(&self, id: DbId) -> AppResult<TemplateWithCategory> {
        TemplateRepo::increment_usage(self.pool, id)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Template",
                    id,
                }
                .into()
            })
    }

    /// Suggest template ideas for a category name. Never fails.
    pub async fn suggest_ideas(&self, category: &str, context: Option<&str>) -> Vec<String> {
        self.generator.generate_ideas(category, context).await
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::error::AppError;

    /// Generator that must never be reached by the tests below.
    struct UnreachableGenerator;

    #[async_trait]
    impl TemplateTextGenerator for UnreachableGenerator {
        async fn generate_template_text(&self, _: &str, _: Option<&str>, _: &str) -> String {
            panic!("generator should not be called");
        }

        async fn generate_ideas(&self, _: &str, _: Option<&str>) -> Vec<String> {
            panic!("generator should not be called");
        }
    }

    /// A pool that never connects. Any store access fails with a database
    /// error, so a validation error proves the store was not touched.
    fn unreachable_pool() -> DbPool {
        PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_millis(200))
            .connect_lazy("postgres://nobody@127.0.0.1:9/none")
            .expect("lazy pool")
    }

    #[tokio::test]
    async fn blank_search_rejected_before_store_access() {
        let pool = unreachable_pool();
        let service = TemplateService::new(&pool, &UnreachableGenerator);

        for term in ["", "   ", "\t"] {
            let err = service.search(term).await.unwrap_err();
            assert_matches!(err, AppError::Core(CoreError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn non_blank_search_reaches_store() {
        let pool = unreachable_pool();
        let service = TemplateService::new(&pool, &UnreachableGenerator);

        let err = service.search("Hi").await.unwrap_err();
        assert_matches!(err, AppError::Database(_));
    }

    #[tokio::test]
    async fn invalid_prompt_rejected_before_generation() {
        let pool = unreachable_pool();
        let service = TemplateService::new(&pool, &UnreachableGenerator);
        let request = GenerateTemplateRequest {
            prompt: "  ".to_string(),
            category_id: 1,
            context: None,
            tone: None,
        };

        let err = service.generate(&request).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn blank_title_rejected_before_store_access() {
        let pool = unreachable_pool();
        let service = TemplateService::new(&pool, &UnreachableGenerator);
        let input = CreateTemplate {
            title: String::new(),
            content: "Hello [Name]".to_string(),
            description: None,
            category_id: 1,
            tags: None,
            is_favorite: false,
        };

        let err = service.create(&input).await.unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    }
}
