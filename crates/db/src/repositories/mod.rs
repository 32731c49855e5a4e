//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&DbPool` as the first argument. No repository holds state;
//! the pool is injected per call so tests can substitute their own.

pub mod playlist_repo;
pub mod playlist_track_repo;
pub mod track_repo;

pub use playlist_repo::PlaylistRepo;
pub use playlist_track_repo::PlaylistTrackRepo;
pub use track_repo::TrackRepo;
