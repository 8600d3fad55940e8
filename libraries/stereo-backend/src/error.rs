//! Error types for the backend

use stereo_actor::ActorError;
use stereo_core::StereoError;
use thiserror::Error;

/// Backend errors
#[derive(Debug, Error)]
pub enum BackendError {
    /// The catalog holds no songs, so there is nothing to play
    #[error("No music library found")]
    NoLibrary,

    /// Catalog lookup failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] StereoError),

    /// The player could not load or control a song
    #[error("Player error: {0}")]
    Player(String),

    /// Actor runtime failure
    #[error("Actor error: {0}")]
    Actor(#[from] ActorError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// Create a player error
    pub fn player(msg: impl Into<String>) -> Self {
        Self::Player(msg.into())
    }
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
