//! Repository for the `playlists` table.

use mixtape_core::types::DbId;

use crate::models::playlist::{CreatePlaylist, Playlist};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description";

/// CRUD operations for playlists. There is no uniqueness constraint on
/// playlist names; `create` always succeeds for validated input.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist, returning the created row with its
    /// assigned id.
    pub async fn create(pool: &DbPool, input: &CreatePlaylist) -> Result<Playlist, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a playlist by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE id = $1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all playlists, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY id");
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }
}
