//! Shared helpers for API integration tests.
//!
//! Builds the same router and middleware stack as `main.rs` (via
//! `build_app_router`) so tests exercise exactly what production runs.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::MySqlPool;
use tower::ServiceExt;

use nutriped_api::config::{DatabaseConfig, ServerConfig};
use nutriped_api::router::build_app_router;
use nutriped_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database block is a placeholder; tests receive their pool from
/// `#[sqlx::test]` and never dial out themselves.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            host: "localhost".to_string(),
            user: "test".to_string(),
            pass: String::new(),
            name: "test".to_string(),
            port: 3306,
        },
    }
}

/// Build the full application router against the given pool.
pub fn build_test_app(pool: MySqlPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::DELETE)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a professional via the API and return its JSON row.
pub async fn seed_profissional(pool: &MySqlPool, nome: &str, login: &str) -> serde_json::Value {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/profissionais",
        serde_json::json!({
            "nome": nome,
            "login": login,
            "senha": "segredo123",
            "sus": format!("sus-{login}"),
            "cnes": format!("cnes-{login}"),
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await
}
