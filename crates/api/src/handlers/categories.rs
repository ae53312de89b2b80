//! Handlers for template categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use outreach_core::error::CoreError;
use outreach_core::types::DbId;
use outreach_db::models::category::{CreateCategory, UpdateCategory};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::services::CategoryService;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Category",
        id,
    })
}

/// GET /api/v1/categories
///
/// Active categories only, ordered by name.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryService::from_state(&state).list_active().await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::from_state(&state)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(DataResponse { data: category }))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::from_state(&state).create(&input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::from_state(&state)
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, is_active = category.is_active, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Hard-deletes an unused category; retires one that still owns templates.
/// Both outcomes return 204.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removal = CategoryService::from_state(&state)
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, ?removal, "Category removed");

    Ok(StatusCode::NO_CONTENT)
}
