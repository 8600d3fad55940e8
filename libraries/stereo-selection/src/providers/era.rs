use super::{ProviderKind, SongProvider};
use std::sync::Arc;
use stereo_core::{Catalog, Result, Song, Year};

/// Random songs released within a closed range of years
pub struct EraProvider {
    catalog: Arc<dyn Catalog>,
    first_year: Year,
    last_year: Year,
    batch_size: usize,
}

impl EraProvider {
    pub fn new(catalog: Arc<dyn Catalog>, first_year: Year, last_year: Year, batch_size: usize) -> Self {
        Self {
            catalog,
            first_year,
            last_year,
            batch_size,
        }
    }

    /// A single year
    pub fn year(catalog: Arc<dyn Catalog>, year: Year, batch_size: usize) -> Self {
        Self::new(catalog, year, year, batch_size)
    }

    /// The ten years starting at `first_year`
    pub fn decade(catalog: Arc<dyn Catalog>, first_year: Year, batch_size: usize) -> Self {
        Self::new(catalog, first_year, first_year.saturating_add(9), batch_size)
    }

    /// Inclusive year range
    pub fn range(&self) -> (Year, Year) {
        (self.first_year, self.last_year)
    }
}

impl SongProvider for EraProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        tracing::debug!(
            first_year = self.first_year,
            last_year = self.last_year,
            batch_size = self.batch_size,
            "Getting random songs for era"
        );
        self.catalog
            .random_song_batch_for_year_range(self.first_year, self.last_year, self.batch_size)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Era
    }
}
