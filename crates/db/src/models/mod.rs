//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, plus any create DTOs the repositories accept.

pub mod playlist;
pub mod playlist_track;
pub mod track;

pub use playlist::{CreatePlaylist, Playlist};
pub use playlist_track::PlaylistTrack;
pub use track::{CreateTrack, Track};
