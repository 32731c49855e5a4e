//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the real router via `tower::ServiceExt::oneshot`, with no
//! TCP listener. [`build_test_app`] goes through the production
//! [`build_app_router`] so the full middleware stack (CORS, request ID,
//! timeout, tracing, panic recovery) is exercised.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use mixtape_api::config::ServerConfig;
use mixtape_api::router::build_app_router;
use mixtape_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router backed by the given pool.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: Router, path: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(path)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: Router, path: &str, json: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a raw (possibly malformed) body to the app.
pub async fn post_raw(app: Router, path: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Insert a track directly through the repository (tracks have no HTTP
/// creation surface).
pub async fn seed_track(pool: &SqlitePool, name: &str, duration_ms: i64) -> i64 {
    mixtape_db::repositories::TrackRepo::create(
        pool,
        &mixtape_db::models::track::CreateTrack {
            name: name.to_string(),
            duration_ms,
        },
    )
    .await
    .unwrap()
    .id
}
