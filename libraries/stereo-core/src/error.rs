/// Core error types for Stereo
use crate::types::{AlbumId, BandId, SongId};
use thiserror::Error;

/// Result type alias using `StereoError`
pub type Result<T> = std::result::Result<T, StereoError>;

/// Core error type for Stereo
#[derive(Error, Debug)]
pub enum StereoError {
    /// The catalog holds no songs at all
    #[error("No music library found")]
    NoLibrary,

    /// Band not found
    #[error("Band not found: {0}")]
    BandNotFound(BandId),

    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// Song not found
    #[error("Song not found: {0}")]
    SongNotFound(SongId),

    /// Catalog backend errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl StereoError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}
