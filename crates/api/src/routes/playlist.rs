//! Route definitions for playlists and their membership sub-resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::playlist;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET  /               -> list
/// POST /               -> create
/// GET  /{id}           -> get
/// GET  /{id}/tracks    -> list_tracks
/// POST /{id}/tracks    -> add_track
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlist::list).post(playlist::create))
        .route("/{id}", get(playlist::get))
        .route(
            "/{id}/tracks",
            get(playlist::list_tracks).post(playlist::add_track),
        )
}
