//! Route definitions for template categories, mounted at `/categories`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, templates};
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET    /                  -> list_categories
/// POST   /                  -> create_category
/// GET    /{id}              -> get_category
/// PUT    /{id}              -> update_category
/// DELETE /{id}              -> delete_category
/// GET    /{id}/templates    -> list_templates_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/{id}/templates",
            get(templates::list_templates_by_category),
        )
}
