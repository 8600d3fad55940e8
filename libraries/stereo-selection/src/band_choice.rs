//! Weighted-random band choice
//!
//! Three strategies, each biased differently, picked with equal probability:
//!
//! - **Uniform**: every band equally likely. Favors songs by bands with few songs.
//! - **By song**: band of a random song. Favors bands with many songs.
//! - **By album**: band of a random album. Favors bands with many albums, which
//!   offsets the worst of the other two biases.

use rand::{thread_rng, Rng};
use stereo_core::{BandId, Catalog, Result};

/// Which weighting to use for one band choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandStrategy {
    Uniform,
    BySong,
    ByAlbum,
}

impl BandStrategy {
    /// Uniform draw over the three strategies
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Self::Uniform,
            1 => Self::BySong,
            _ => Self::ByAlbum,
        }
    }

    /// Strategy to try when this one finds nothing
    fn fallback(self) -> Self {
        match self {
            Self::Uniform => Self::BySong,
            Self::BySong => Self::ByAlbum,
            Self::ByAlbum => Self::Uniform,
        }
    }

    fn pick(self, catalog: &dyn Catalog) -> Result<Option<BandId>> {
        let band_id = match self {
            Self::Uniform => catalog.random_band()?.map(|band| band.id),
            Self::BySong => catalog
                .random_song_batch(1)?
                .first()
                .map(|song| song.band_id),
            Self::ByAlbum => catalog.random_album()?.map(|album| album.band_id),
        };
        Ok(band_id)
    }
}

/// Choose a band using a strategy drawn from `rng`
///
/// Returns `None` only when no strategy finds a band, i.e. the catalog is empty.
pub fn choose_band_with<R: Rng + ?Sized>(
    catalog: &dyn Catalog,
    rng: &mut R,
) -> Result<Option<BandId>> {
    let mut strategy = BandStrategy::draw(rng);
    for _ in 0..3 {
        if let Some(band_id) = strategy.pick(catalog)? {
            return Ok(Some(band_id));
        }
        tracing::debug!(?strategy, "Band strategy found nothing, falling back");
        strategy = strategy.fallback();
    }
    Ok(None)
}

/// Choose a band with the thread-local RNG
pub fn choose_band(catalog: &dyn Catalog) -> Result<Option<BandId>> {
    choose_band_with(catalog, &mut thread_rng())
}
