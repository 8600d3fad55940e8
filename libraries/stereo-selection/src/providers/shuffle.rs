use super::{ProviderKind, SongProvider};
use std::sync::Arc;
use stereo_core::{Catalog, Result, Song};

/// Random songs from the whole collection
pub struct ShuffleProvider {
    catalog: Arc<dyn Catalog>,
    batch_size: usize,
}

impl ShuffleProvider {
    pub fn new(catalog: Arc<dyn Catalog>, batch_size: usize) -> Self {
        Self {
            catalog,
            batch_size,
        }
    }
}

impl SongProvider for ShuffleProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        tracing::debug!(batch_size = self.batch_size, "Getting random songs");
        self.catalog.random_song_batch(self.batch_size)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Shuffle
    }
}
