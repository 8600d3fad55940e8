use super::{ProviderKind, SongProvider};
use crate::band_choice::choose_band;
use std::sync::Arc;
use stereo_core::{BandId, Catalog, Result, Song, SongOrder};

/// Songs per band once the provider is rolling
const SHOT_SIZE: usize = 2;

/// "Double shot": two random songs by one band, then on to the next band
///
/// When seeded with the band currently playing, the first batch is a single song so
/// that together with the current one it still makes a pair.
pub struct DoubleShotProvider {
    catalog: Arc<dyn Catalog>,
    next_band: Option<BandId>,
    next_size: usize,
}

impl DoubleShotProvider {
    pub fn new(catalog: Arc<dyn Catalog>, seed_band: Option<BandId>) -> Result<Self> {
        let (next_band, next_size) = match seed_band {
            Some(band_id) => (Some(band_id), 1),
            None => (choose_band(catalog.as_ref())?, SHOT_SIZE),
        };
        Ok(Self {
            catalog,
            next_band,
            next_size,
        })
    }

    /// Band the next batch will come from
    pub fn next_band(&self) -> Option<BandId> {
        self.next_band
    }
}

impl SongProvider for DoubleShotProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        let songs = match self.next_band {
            Some(band_id) => {
                tracing::debug!(band_id, size = self.next_size, "Double shot");
                self.catalog
                    .songs_for_band(band_id, SongOrder::Limited(self.next_size))?
            }
            None => Vec::new(),
        };

        self.next_band = choose_band(self.catalog.as_ref())?;
        self.next_size = SHOT_SIZE;
        Ok(songs)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::DoubleShot
    }
}
