//! Handlers for the `/playlists` resource and its membership sub-resource.
//!
//! Check order on the membership endpoints is fixed: path identifier
//! format, then body parse, then field validity, then existence checks,
//! then the insert. The existence checks exist for friendlier messages
//! only; the schema's unique constraint is the race-free authority on
//! duplicate membership.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mixtape_core::error::CoreError;
use mixtape_core::validation;
use serde_json::Value;

use mixtape_db::models::playlist::CreatePlaylist;
use mixtape_db::repositories::{PlaylistRepo, PlaylistTrackRepo, TrackRepo};

use crate::error::{is_unique_violation, AppError, AppResult};
use crate::state::AppState;

/// GET /playlists
///
/// List all playlists, ordered by id ascending.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let playlists = PlaylistRepo::list(&state.pool).await?;
    Ok(Json(playlists))
}

/// POST /playlists
///
/// Create a playlist from `{name, description}`. Always succeeds once the
/// body validates; playlist names are not unique.
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = parse_body(body)?;
    let input = validation::validate_new_playlist(&body)?;

    let playlist = PlaylistRepo::create(&state.pool, &CreatePlaylist::from(input)).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /playlists/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = validation::parse_route_id(&id)?;
    let playlist = PlaylistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id,
        }))?;
    Ok(Json(playlist))
}

/// GET /playlists/{id}/tracks
///
/// List the playlist's tracks, ordered by track id ascending. A playlist
/// with no memberships returns an empty array, not 404; only a missing
/// playlist does.
pub async fn list_tracks(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let playlist_id = validation::parse_route_id(&id)?;

    PlaylistRepo::find_by_id(&state.pool, playlist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id: playlist_id,
        }))?;

    let tracks = PlaylistTrackRepo::list_tracks(&state.pool, playlist_id).await?;
    Ok(Json(tracks))
}

/// POST /playlists/{id}/tracks
///
/// Add a track to a playlist from `{trackId}`. A missing playlist is 404;
/// a missing track is 400 (bad reference, not a missing resource at this
/// path); a duplicate pair is 400 with a membership message.
pub async fn add_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let playlist_id = validation::parse_route_id(&id)?;
    let body = parse_body(body)?;
    let track_id = validation::validate_track_ref(&body)?;

    PlaylistRepo::find_by_id(&state.pool, playlist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Playlist",
            id: playlist_id,
        }))?;

    if TrackRepo::find_by_id(&state.pool, track_id).await?.is_none() {
        return Err(CoreError::Validation(format!(
            "Track with id {track_id} does not exist"
        ))
        .into());
    }

    // Optimistic insert: the constraint, not the checks above, decides
    // uniqueness. Only this insert's unique violation is reinterpreted as
    // a client error; everything else propagates as a storage fault.
    match PlaylistTrackRepo::add(&state.pool, playlist_id, track_id).await {
        Ok(membership) => Ok((StatusCode::CREATED, Json(membership))),
        Err(err) if is_unique_violation(&err) => Err(CoreError::Conflict(format!(
            "Track with id {track_id} is already in this playlist"
        ))
        .into()),
        Err(err) => Err(err.into()),
    }
}

/// Unwrap a JSON body extraction, mapping any rejection (malformed JSON,
/// wrong content type, empty body) to a 400 in the standard error shape.
fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    let Json(value) = body.map_err(|_| {
        AppError::BadRequest("Request body must be a valid JSON object".to_string())
    })?;
    Ok(value)
}
