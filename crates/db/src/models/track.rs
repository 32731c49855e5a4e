//! Track entity model.
//!
//! Tracks are reference data: rows are created by seeding (or tests), never
//! through the HTTP surface.

use mixtape_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub name: String,
    pub duration_ms: i64,
}

/// DTO for inserting a track (seeding and tests only).
#[derive(Debug, Clone)]
pub struct CreateTrack {
    pub name: String,
    pub duration_ms: i64,
}
