//! Song providers
//!
//! Each provider follows one simple rule for which songs come next. Repeatable
//! providers can be asked forever; single-shot providers hand over one playlist
//! and then return nothing until they are replaced.

mod album;
mod band;
mod block_party;
mod double_shot;
mod era;
mod shuffle;

pub use album::AlbumProvider;
pub use band::{BandSequentialProvider, BandShuffleProvider};
pub use block_party::BlockPartyProvider;
pub use double_shot::DoubleShotProvider;
pub use era::EraProvider;
pub use shuffle::ShuffleProvider;

use serde::{Deserialize, Serialize};
use stereo_core::{Result, Song};

/// Which provider is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    Shuffle,
    Era,
    DoubleShot,
    BlockParty,
    BandShuffle,
    BandSequential,
    Album,
}

impl ProviderKind {
    /// Whether the provider only ever returns one non-empty batch
    pub fn is_single_shot(self) -> bool {
        matches!(self, Self::BandSequential | Self::Album)
    }
}

/// Source of the next batch of songs
pub trait SongProvider {
    /// Next batch. Empty means this provider has nothing more to give.
    fn next_batch(&mut self) -> Result<Vec<Song>>;

    /// Provider identity, for status and diagnostics
    fn kind(&self) -> ProviderKind;
}

/// Playlist materialized up front and handed over exactly once
#[derive(Debug, Default)]
struct OneShot {
    playlist: Vec<Song>,
}

impl OneShot {
    fn new(playlist: Vec<Song>) -> Self {
        Self { playlist }
    }

    fn take(&mut self) -> Vec<Song> {
        std::mem::take(&mut self.playlist)
    }

    fn remaining(&self) -> &[Song] {
        &self.playlist
    }
}
