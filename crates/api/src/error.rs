use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use outreach_core::error::CoreError;
use serde_json::json;

/// Application-level error type for services and HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `outreach_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for service and handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL `foreign_key_violation`.
const PG_FOREIGN_KEY_VIOLATION: &str = "23503";

/// PostgreSQL `check_violation`.
const PG_CHECK_VIOLATION: &str = "23514";

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key and check constraint violations map to 422. Referential
///   integrity (e.g. a template pointing at a missing category) is left to
///   the store, so this is where those failures surface.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            if matches!(
                code.as_deref(),
                Some(PG_FOREIGN_KEY_VIOLATION) | Some(PG_CHECK_VIOLATION)
            ) {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::info!(constraint, "Constraint violation");
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "CONSTRAINT_VIOLATION",
                    format!("Request violates constraint: {constraint}"),
                );
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
