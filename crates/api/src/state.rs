use std::sync::Arc;

use outreach_ai::TemplateTextGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: outreach_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Text generator used by the AI template endpoints.
    pub generator: Arc<dyn TemplateTextGenerator>,
}
