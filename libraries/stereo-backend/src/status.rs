//! Backend status snapshots

use serde::{Deserialize, Serialize};
use std::fmt;
use stereo_core::SongInfo;
use stereo_selection::{PlayMode, SubModeLabel};

/// What the backend is doing right now
///
/// Built fresh on every externally visible change and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendStatus {
    pub mode: PlayMode,
    pub sub_mode: SubModeLabel,
    pub is_playing: bool,
    pub current_song: Option<SongInfo>,
}

impl Default for BackendStatus {
    fn default() -> Self {
        Self {
            mode: PlayMode::Shuffle,
            sub_mode: SubModeLabel::None,
            is_playing: false,
            current_song: None,
        }
    }
}

impl fmt::Display for BackendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.mode)?;
        if self.sub_mode != SubModeLabel::None {
            write!(f, ": {}", self.sub_mode)?;
        }
        write!(f, "] {}", if self.is_playing { "playing" } else { "paused" })?;

        match &self.current_song {
            Some(info) => {
                write!(f, " | {} - {}", info.band.name, info.song.name)?;
                if let Some(album) = &info.album {
                    write!(f, " ({})", album.name)?;
                }
                if let Some(year) = info.song.year {
                    write!(f, " [{year}]")?;
                }
                Ok(())
            }
            None => write!(f, " | nothing loaded"),
        }
    }
}
