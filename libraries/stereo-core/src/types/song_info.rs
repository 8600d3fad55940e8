//! Denormalized song details

use super::{Album, Band, Song};
use serde::{Deserialize, Serialize};

/// Everything about a song that playback and display need
///
/// Built once when a batch is handed to the player so nothing has to go back to the
/// catalog mid-flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    pub band: Band,
    pub song: Song,
    pub album: Option<Album>,
}

impl SongInfo {
    /// Bundle a song with its band and (optional) album
    pub fn new(band: Band, song: Song, album: Option<Album>) -> Self {
        Self { band, song, album }
    }
}
