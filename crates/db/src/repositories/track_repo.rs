//! Repository for the `tracks` table.

use mixtape_core::types::DbId;

use crate::models::track::{CreateTrack, Track};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, duration_ms";

/// Read operations for tracks, plus an insert used only by seeding and
/// tests (the HTTP surface never creates tracks).
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (name, duration_ms) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.name)
            .bind(input.duration_ms)
            .fetch_one(pool)
            .await
    }

    /// Find a track by id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks, ordered by id ascending.
    pub async fn list(pool: &DbPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY id");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }
}
