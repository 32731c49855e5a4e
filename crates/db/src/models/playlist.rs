//! Playlist entity model and create DTO.

use mixtape_core::types::DbId;
use mixtape_core::validation::NewPlaylist;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub description: String,
}

/// DTO for inserting a playlist.
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub name: String,
    pub description: String,
}

impl From<NewPlaylist> for CreatePlaylist {
    fn from(input: NewPlaylist) -> Self {
        Self {
            name: input.name,
            description: input.description,
        }
    }
}
