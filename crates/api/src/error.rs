use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mixtape_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{"error": <string>}`
/// JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `mixtape_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                // Duplicate membership is a client error, not a conflict
                // status: the surface contract maps it to 400.
                CoreError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error reaching the response boundary.
///
/// Every database error that gets this far is an unanticipated storage
/// fault: it maps to 500 with a sanitized message, full detail logged for
/// operator diagnosis. The one storage error that is deliberately
/// reinterpreted as a client error -- the unique violation on the
/// playlist/track pair -- is handled at its insert call site via
/// [`is_unique_violation`] and never reaches this function as a
/// `Database` variant.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    tracing::error!(error = %err, "Database error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
    )
}

/// Structurally detect a unique-constraint violation.
///
/// Uses the driver's error classification rather than message-text
/// matching; message text is not a stable contract.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
