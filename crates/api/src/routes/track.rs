//! Route definitions for tracks.

use axum::routing::get;
use axum::Router;

use crate::handlers::track;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET  /       -> list
/// GET  /{id}   -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(track::list))
        .route("/{id}", get(track::get))
}
