//! Repository for the `playlist_tracks` junction table.
//!
//! The schema-level `UNIQUE (playlist_id, track_id)` constraint is the
//! authority on duplicate membership. `add` performs an optimistic insert
//! and surfaces the raw sqlx error; callers detect the unique violation
//! structurally and decide how to report it. Existence checks done before
//! calling `add` are only there for friendlier messages and are not
//! race-free.

use mixtape_core::types::DbId;

use crate::models::playlist_track::PlaylistTrack;
use crate::models::track::Track;
use crate::DbPool;

/// Membership operations on the playlist↔track junction.
pub struct PlaylistTrackRepo;

impl PlaylistTrackRepo {
    /// Insert a membership row for (playlist, track), returning the
    /// created row. A duplicate pair fails with a database unique-violation
    /// error; referential failures surface as foreign-key errors.
    pub async fn add(
        pool: &DbPool,
        playlist_id: DbId,
        track_id: DbId,
    ) -> Result<PlaylistTrack, sqlx::Error> {
        sqlx::query_as::<_, PlaylistTrack>(
            "INSERT INTO playlist_tracks (playlist_id, track_id) \
             VALUES ($1, $2) \
             RETURNING id, playlist_id, track_id",
        )
        .bind(playlist_id)
        .bind(track_id)
        .fetch_one(pool)
        .await
    }

    /// List the tracks belonging to a playlist, ordered by track id
    /// ascending. An empty result is a normal outcome, not an error;
    /// playlist existence is the caller's concern.
    pub async fn list_tracks(
        pool: &DbPool,
        playlist_id: DbId,
    ) -> Result<Vec<Track>, sqlx::Error> {
        sqlx::query_as::<_, Track>(
            "SELECT t.id, t.name, t.duration_ms \
             FROM tracks t \
             JOIN playlist_tracks pt ON pt.track_id = t.id \
             WHERE pt.playlist_id = $1 \
             ORDER BY t.id",
        )
        .bind(playlist_id)
        .fetch_all(pool)
        .await
    }

    /// Count membership rows for a (playlist, track) pair. Used by tests
    /// to assert the uniqueness invariant held.
    pub async fn count_pair(
        pool: &DbPool,
        playlist_id: DbId,
        track_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM playlist_tracks WHERE playlist_id = $1 AND track_id = $2",
        )
        .bind(playlist_id)
        .bind(track_id)
        .fetch_one(pool)
        .await
    }
}
