//! Play modes and sub-mode labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level play mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    /// Whole collection
    Shuffle,

    /// Locked to one band
    Band,

    /// Locked to one album
    Album,

    /// Locked to a year or decade
    Year,
}

/// Label for the active sub-mode, shown next to the mode in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubModeLabel {
    None,
    DoubleShot,
    BlockParty,
    Sequential,
    Decade,
}

/// Sub-modes of collection (shuffle) mode, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionSubMode {
    #[default]
    FullShuffle,
    DoubleShot,
    BlockParty,
}

impl CollectionSubMode {
    /// Next sub-mode in the cycle
    pub fn next(self) -> Self {
        match self {
            Self::FullShuffle => Self::DoubleShot,
            Self::DoubleShot => Self::BlockParty,
            Self::BlockParty => Self::FullShuffle,
        }
    }

    pub fn label(self) -> SubModeLabel {
        match self {
            Self::FullShuffle => SubModeLabel::None,
            Self::DoubleShot => SubModeLabel::DoubleShot,
            Self::BlockParty => SubModeLabel::BlockParty,
        }
    }
}

impl fmt::Display for PlayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shuffle => "Shuffle",
            Self::Band => "Band",
            Self::Album => "Album",
            Self::Year => "Year",
        };
        f.write_str(name)
    }
}

impl fmt::Display for SubModeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "",
            Self::DoubleShot => "Double Shot",
            Self::BlockParty => "Block Party",
            Self::Sequential => "Sequential",
            Self::Decade => "Decade",
        };
        f.write_str(name)
    }
}
