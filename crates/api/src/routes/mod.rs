pub mod playlist;
pub mod track;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /tracks                     GET  list
/// /tracks/{id}                GET  fetch one
///
/// /playlists                  GET  list, POST create
/// /playlists/{id}             GET  fetch one
/// /playlists/{id}/tracks      GET  list members, POST add member
/// ```
///
/// Anything else falls through to the router-level not-found fallback.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/tracks", track::router())
        .nest("/playlists", playlist::router())
}
