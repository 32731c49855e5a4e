//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct
//! HTTP status code and `{"error": <string>}` body. They do NOT need an
//! HTTP server -- they call `IntoResponse` directly on `AppError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;
use mixtape_api::error::AppError;
use mixtape_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Playlist",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Playlist with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("'name' is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "'name' is required");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Conflict maps to 400 (duplicate membership is a client
// error on this surface, not a 409)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn conflict_error_returns_400() {
    let err = AppError::Core(CoreError::Conflict(
        "Track with id 7 is already in this playlist".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Track with id 7 is already in this playlist");
}

// ---------------------------------------------------------------------------
// Test: AppError::BadRequest maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("Request body must be a valid JSON object".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Request body must be a valid JSON object");
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Core(CoreError::Internal(
        "secret database credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: an unanticipated database error maps to a sanitized 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_returns_500_and_sanitizes_message() {
    let err = AppError::Database(sqlx::Error::PoolTimedOut);

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: error bodies carry exactly the `error` member
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_body_has_only_the_error_member() {
    let err = AppError::Core(CoreError::Validation("bad input".into()));

    let (_, json) = error_to_response(err).await;

    let obj = json.as_object().unwrap();
    assert_eq!(obj.len(), 1);
    assert!(obj.contains_key("error"));
}
