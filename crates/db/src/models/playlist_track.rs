//! Playlist membership (the playlist↔track junction row).

use mixtape_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `playlist_tracks` table. One row per (playlist, track)
/// pair; the pair is unique at the schema level.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistTrack {
    pub id: DbId,
    pub playlist_id: DbId,
    pub track_id: DbId,
}
