use super::{ProviderKind, SongProvider};
use crate::band_choice::choose_band;
use std::sync::Arc;
use stereo_core::{Catalog, Result, Song, SongOrder};

/// "Block party": a block of songs by one band, then a block of random songs
pub struct BlockPartyProvider {
    catalog: Arc<dyn Catalog>,
    block_size: usize,
}

impl BlockPartyProvider {
    pub fn new(catalog: Arc<dyn Catalog>, block_size: usize) -> Self {
        Self {
            catalog,
            block_size,
        }
    }
}

impl SongProvider for BlockPartyProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        let mut songs = match choose_band(self.catalog.as_ref())? {
            Some(band_id) => {
                tracing::debug!(band_id, "Using band for block party");
                self.catalog
                    .songs_for_band(band_id, SongOrder::Limited(self.block_size))?
            }
            None => Vec::new(),
        };
        songs.extend(self.catalog.random_song_batch(self.block_size)?);
        Ok(songs)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::BlockParty
    }
}
