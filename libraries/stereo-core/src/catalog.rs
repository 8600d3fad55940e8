//! Catalog trait
//!
//! Read-only lookups of bands, albums and songs. Scanning and writing the catalog
//! happen before the backend starts, so implementors only ever see concurrent reads.

use crate::error::Result;
use crate::types::{Album, AlbumId, Band, BandId, Song, SongInfo, Year};

/// How a band's songs should be returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongOrder {
    /// Every song by the band, in random order
    Shuffled,

    /// Every song by the band, chronologically then by album position
    Ordered,

    /// A random selection of at most this many songs
    Limited(usize),
}

/// Read-only access to the music collection
///
/// Implementations must be shareable across threads. The selection engine holds an
/// `Arc<dyn Catalog>` and only calls it from the controller thread, but the UI and
/// front ends may query the same handle.
pub trait Catalog: Send + Sync {
    /// All bands, sorted by name
    fn all_bands(&self) -> Result<Vec<Band>>;

    /// Look up a band
    ///
    /// # Errors
    /// Returns `StereoError::BandNotFound` when no band has this id
    fn band_by_id(&self, id: BandId) -> Result<Band>;

    /// Any band, chosen uniformly at random. `None` for an empty collection.
    fn random_band(&self) -> Result<Option<Band>>;

    /// All albums by a band, sorted by year then name
    fn albums_for_band(&self, id: BandId) -> Result<Vec<Album>>;

    /// Look up an album
    ///
    /// # Errors
    /// Returns `StereoError::AlbumNotFound` when no album has this id
    fn album_by_id(&self, id: AlbumId) -> Result<Album>;

    /// Any album, chosen uniformly at random. `None` when there are no albums.
    fn random_album(&self) -> Result<Option<Album>>;

    /// Every distinct year some song is tagged with, ascending
    fn all_years(&self) -> Result<Vec<Year>>;

    /// Songs by one band, in the requested order
    fn songs_for_band(&self, id: BandId, order: SongOrder) -> Result<Vec<Song>>;

    /// Songs on one album, in track order
    fn songs_for_album(&self, id: AlbumId) -> Result<Vec<Song>>;

    /// Up to `size` songs chosen at random from the whole collection
    fn random_song_batch(&self, size: usize) -> Result<Vec<Song>>;

    /// Up to `size` random songs released between `first` and `last` (inclusive)
    fn random_song_batch_for_year_range(
        &self,
        first: Year,
        last: Year,
        size: usize,
    ) -> Result<Vec<Song>>;

    /// Whether the collection holds at least one song
    fn has_songs(&self) -> Result<bool> {
        Ok(!self.random_song_batch(1)?.is_empty())
    }

    /// Attach band and album details to a song
    fn song_info(&self, song: Song) -> Result<SongInfo> {
        let band = self.band_by_id(song.band_id)?;
        let album = match song.album_id {
            Some(album_id) => Some(self.album_by_id(album_id)?),
            None => None,
        };
        Ok(SongInfo::new(band, song, album))
    }
}
