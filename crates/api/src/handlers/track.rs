//! Handlers for the `/tracks` resource.
//!
//! Tracks are read-only over HTTP; rows come from out-of-band seeding.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use mixtape_core::error::CoreError;
use mixtape_core::validation;
use mixtape_db::repositories::TrackRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /tracks
///
/// List all tracks, ordered by id ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tracks = TrackRepo::list(&state.pool).await?;
    Ok(Json(tracks))
}

/// GET /tracks/{id}
///
/// Fetch a single track. The id is extracted as a raw string so the
/// validator can enforce the canonical-form rules (`Path<i64>` would
/// accept `"01"` and `"+1"`).
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = validation::parse_route_id(&id)?;
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;
    Ok(Json(track))
}
