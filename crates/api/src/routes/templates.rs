//! Route definitions for message templates, mounted at `/templates`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::templates;
use crate::state::AppState;

/// Template routes.
///
/// ```text
/// GET    /                  -> list_templates
/// POST   /                  -> create_template
/// GET    /favorites         -> list_favorite_templates
/// GET    /search?q=         -> search_templates
/// POST   /generate          -> generate_template
/// GET    /ideas             -> template_ideas
/// GET    /{id}              -> get_template
/// PUT    /{id}              -> update_template
/// DELETE /{id}              -> delete_template
/// POST   /{id}/use          -> use_template
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(templates::list_templates).post(templates::create_template),
        )
        .route("/favorites", get(templates::list_favorite_templates))
        .route("/search", get(templates::search_templates))
        .route("/generate", post(templates::generate_template))
        .route("/ideas", get(templates::template_ideas))
        .route(
            "/{id}",
            get(templates::get_template)
                .put(templates::update_template)
                .delete(templates::delete_template),
        )
        .route("/{id}/use", post(templates::use_template))
}
