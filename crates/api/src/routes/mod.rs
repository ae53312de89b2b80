pub mod categories;
pub mod health;
pub mod templates;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                                       list, create
/// /templates/favorites                             favorites (GET)
/// /templates/search?q=                             substring search (GET)
/// /templates/generate                              AI generate and persist (POST)
/// /templates/ideas?category=&context=              AI idea suggestions (GET)
/// /templates/{id}                                  get, update, delete
/// /templates/{id}/use                              record usage (POST)
///
/// /categories                                      list active, create
/// /categories/{id}                                 get, update, delete/retire
/// /categories/{id}/templates                       templates in category (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", templates::router())
        .nest("/categories", categories::router())
}
