//! Song types

use super::{AlbumId, BandId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub type SongId = i64;

/// Calendar year a song or album was released
pub type Year = i32;

/// A single playable song
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    /// Storage location for the audio decoder
    pub path: PathBuf,
    pub band_id: BandId,
    #[serde(default)]
    pub album_id: Option<AlbumId>,
    #[serde(default)]
    pub year: Option<Year>,
}

impl Song {
    /// Create a song
    pub fn new(
        id: SongId,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        band_id: BandId,
        album_id: Option<AlbumId>,
        year: Option<Year>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            path: path.into(),
            band_id,
            album_id,
            year,
        }
    }
}
