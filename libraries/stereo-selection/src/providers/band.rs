use super::{OneShot, ProviderKind, SongProvider};
use crate::split::split_songs;
use std::sync::Arc;
use stereo_core::{Album, BandId, Catalog, Result, Song, SongId, SongOrder};

/// Every song by one band, reshuffled on each batch
pub struct BandShuffleProvider {
    catalog: Arc<dyn Catalog>,
    band_id: BandId,
}

impl BandShuffleProvider {
    pub fn new(catalog: Arc<dyn Catalog>, band_id: BandId) -> Self {
        Self { catalog, band_id }
    }
}

impl SongProvider for BandShuffleProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        tracing::debug!(band_id = self.band_id, "Getting all songs for band");
        self.catalog.songs_for_band(self.band_id, SongOrder::Shuffled)
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::BandShuffle
    }
}

/// A band's whole discography in order, handed over once
pub struct BandSequentialProvider {
    band_id: BandId,
    playlist: OneShot,
}

impl BandSequentialProvider {
    /// Chronological playlist, rotated to start after (or at, with `keep`) `pivot`
    pub fn new(
        catalog: &dyn Catalog,
        band_id: BandId,
        pivot: Option<SongId>,
        keep: bool,
    ) -> Result<Self> {
        let ordered = catalog.songs_for_band(band_id, SongOrder::Ordered)?;
        let playlist = match pivot {
            Some(song_id) => split_songs(ordered, song_id, keep),
            None => ordered,
        };
        Ok(Self {
            band_id,
            playlist: OneShot::new(playlist),
        })
    }

    /// Playlist starting with the first track of `album`
    pub fn at_album_start(catalog: &dyn Catalog, album: &Album) -> Result<Self> {
        let first_track = catalog.songs_for_album(album.id)?.first().map(|song| song.id);
        Self::new(catalog, album.band_id, first_track, true)
    }

    pub fn band_id(&self) -> BandId {
        self.band_id
    }

    /// Songs not yet handed over
    pub fn remaining(&self) -> &[Song] {
        self.playlist.remaining()
    }
}

impl SongProvider for BandSequentialProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        Ok(self.playlist.take())
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::BandSequential
    }
}
