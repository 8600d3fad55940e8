//! Album types

use super::{BandId, Year};
use serde::{Deserialize, Serialize};

pub type AlbumId = i64;

/// An album
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub name: String,
    pub band_id: BandId,
    /// Release year, if tagged
    #[serde(default)]
    pub year: Option<Year>,
}

impl Album {
    /// Create an album
    pub fn new(id: AlbumId, name: impl Into<String>, band_id: BandId, year: Option<Year>) -> Self {
        Self {
            id,
            name: name.into(),
            band_id,
            year,
        }
    }
}
