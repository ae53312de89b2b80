#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use outreach_ai::{AiConfig, OpenAiGenerator, TemplateTextGenerator};
use outreach_api::config::ServerConfig;
use outreach_api::router::build_app_router;
use outreach_api::state::AppState;

/// Content returned by [`StubGenerator`] for every template request.
pub const STUB_CONTENT: &str = "Hi [Name], stub generated message.";

/// Deterministic generator standing in for the external API.
pub struct StubGenerator;

#[async_trait]
impl TemplateTextGenerator for StubGenerator {
    async fn generate_template_text(
        &self,
        prompt: &str,
        _context: Option<&str>,
        tone: &str,
    ) -> String {
        format!("{STUB_CONTENT} ({tone}: {prompt})")
    }

    async fn generate_ideas(&self, category: &str, _context: Option<&str>) -> Vec<String> {
        vec![format!("{category} idea one"), format!("{category} idea two")]
    }
}

/// Build a test `ServerConfig` with safe defaults and no AI credential.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
        ai: AiConfig::default(),
    }
}

/// Full application router backed by [`StubGenerator`].
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(StubGenerator))
}

/// Full application router backed by the real HTTP generator pointed at a
/// port nothing listens on, so every call takes the fallback path.
pub fn build_unreachable_ai_app(pool: PgPool) -> Router {
    let ai = AiConfig {
        api_key: Some("test-key".to_string()),
        api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
        ..AiConfig::default()
    };
    build_test_app_with(pool, Arc::new(OpenAiGenerator::new(&ai)))
}

pub fn build_test_app_with(pool: PgPool, generator: Arc<dyn TemplateTextGenerator>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator,
    };
    build_app_router(state, &config)
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
