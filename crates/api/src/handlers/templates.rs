//! Handlers for message templates.
//!
//! Covers CRUD, the favorites/category/search listings, usage tracking, and
//! the AI generate/ideas endpoints. Each handler delegates to
//! [`TemplateService`] and wraps results in [`DataResponse`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use outreach_core::error::CoreError;
use outreach_core::types::DbId;
use outreach_db::models::template::{
    CreateTemplate, GenerateTemplateRequest, IdeasParams, SearchParams, UpdateTemplate,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::services::TemplateService;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Template",
        id,
    })
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// GET /api/v1/templates
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let templates = TemplateService::from_state(&state).list_all().await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateService::from_state(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplate>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateService::from_state(&state).create(&input).await?;

    tracing::info!(
        template_id = template.id,
        category_id = template.category_id,
        "Template created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// PUT /api/v1/templates/{id}
///
/// Full replace of title, content, description, category, favorite flag,
/// and tags.
pub async fn update_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTemplate>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateService::from_state(&state)
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(template_id = id, "Template updated");

    Ok(Json(DataResponse { data: template }))
}

/// DELETE /api/v1/templates/{id}
pub async fn delete_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TemplateService::from_state(&state).delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(template_id = id, "Template deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Filtered listings
// ---------------------------------------------------------------------------

/// GET /api/v1/categories/{id}/templates
pub async fn list_templates_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateService::from_state(&state)
        .list_by_category(category_id)
        .await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/favorites
pub async fn list_favorite_templates(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateService::from_state(&state).list_favorites().await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /api/v1/templates/search?q=
///
/// A missing or blank `q` is a 400.
pub async fn search_templates(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let templates = TemplateService::from_state(&state)
        .search(&params.q)
        .await?;
    Ok(Json(DataResponse { data: templates }))
}

// ---------------------------------------------------------------------------
// Usage and AI generation
// ---------------------------------------------------------------------------

/// POST /api/v1/templates/{id}/use
///
/// Increments the usage counter and returns the updated template.
pub async fn use_template(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateService::from_state(&state).record_usage(id).await?;

    tracing::debug!(template_id = id, usage_count = template.usage_count, "Template used");

    Ok(Json(DataResponse { data: template }))
}

/// POST /api/v1/templates/generate
///
/// Always yields a persisted template: if the external API is unavailable
/// the content is the deterministic fallback text.
pub async fn generate_template(
    State(state): State<AppState>,
    Json(input): Json<GenerateTemplateRequest>,
) -> AppResult<impl IntoResponse> {
    let template = TemplateService::from_state(&state).generate(&input).await?;

    tracing::info!(
        template_id = template.id,
        category_id = template.category_id,
        "AI template generated",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: template })))
}

/// GET /api/v1/templates/ideas?category=&context=
pub async fn template_ideas(
    State(state): State<AppState>,
    Query(params): Query<IdeasParams>,
) -> AppResult<impl IntoResponse> {
    let ideas = TemplateService::from_state(&state)
        .suggest_ideas(&params.category, params.context.as_deref())
        .await;
    Ok(Json(DataResponse { data: ideas }))
}
