//! In-memory catalog
//!
//! Holds a whole collection in memory and answers every `Catalog` query with the
//! same ordering rules as the on-device store. Used by tests and the command-line
//! front end; a library can be described in a JSON file (`LibraryFile`).

use crate::catalog::{Catalog, SongOrder};
use crate::error::{Result, StereoError};
use crate::types::{Album, AlbumId, Band, BandId, Song, Year};
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Serialized description of a collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryFile {
    /// Every band in the collection
    #[serde(default)]
    pub bands: Vec<Band>,
    /// Albums, each owned by a listed band
    #[serde(default)]
    pub albums: Vec<Album>,
    /// Songs, each owned by a listed band and optionally a listed album
    #[serde(default)]
    pub songs: Vec<Song>,
}

impl LibraryFile {
    /// Read a library description from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

/// Catalog backed by plain collections
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    bands: BTreeMap<BandId, Band>,
    albums: BTreeMap<AlbumId, Album>,
    songs: Vec<Song>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a library description
    ///
    /// # Errors
    /// Returns `StereoError::Catalog` when an album or song refers to a band or album
    /// that is not part of the library.
    pub fn from_library(library: LibraryFile) -> Result<Self> {
        let mut catalog = Self::new();
        for band in library.bands {
            catalog.add_band(band);
        }
        for album in library.albums {
            catalog.add_album(album)?;
        }
        for song in library.songs {
            catalog.add_song(song)?;
        }

        tracing::debug!(
            bands = catalog.bands.len(),
            albums = catalog.albums.len(),
            songs = catalog.songs.len(),
            "Loaded in-memory catalog"
        );
        Ok(catalog)
    }

    /// Add (or replace) a band
    pub fn add_band(&mut self, band: Band) {
        self.bands.insert(band.id, band);
    }

    /// Add (or replace) an album
    pub fn add_album(&mut self, album: Album) -> Result<()> {
        if !self.bands.contains_key(&album.band_id) {
            return Err(StereoError::catalog(format!(
                "album {} refers to unknown band {}",
                album.id, album.band_id
            )));
        }
        self.albums.insert(album.id, album);
        Ok(())
    }

    /// Add a song
    pub fn add_song(&mut self, song: Song) -> Result<()> {
        if !self.bands.contains_key(&song.band_id) {
            return Err(StereoError::catalog(format!(
                "song {} refers to unknown band {}",
                song.id, song.band_id
            )));
        }
        if let Some(album_id) = song.album_id {
            if !self.albums.contains_key(&album_id) {
                return Err(StereoError::catalog(format!(
                    "song {} refers to unknown album {}",
                    song.id, album_id
                )));
            }
        }
        self.songs.push(song);
        Ok(())
    }

    /// Number of songs in the catalog
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    fn band_songs(&self, id: BandId) -> impl Iterator<Item = &Song> {
        self.songs.iter().filter(move |song| song.band_id == id)
    }
}

/// Pick up to `size` items at random, in random order
fn sample<'a>(items: impl Iterator<Item = &'a Song>, size: usize) -> Vec<Song> {
    let mut rng = thread_rng();
    let mut pool: Vec<&Song> = items.collect();
    pool.shuffle(&mut rng);
    pool.into_iter().take(size).cloned().collect()
}

impl Catalog for MemoryCatalog {
    fn all_bands(&self) -> Result<Vec<Band>> {
        let mut bands: Vec<Band> = self.bands.values().cloned().collect();
        bands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(bands)
    }

    fn band_by_id(&self, id: BandId) -> Result<Band> {
        self.bands
            .get(&id)
            .cloned()
            .ok_or(StereoError::BandNotFound(id))
    }

    fn random_band(&self) -> Result<Option<Band>> {
        let bands: Vec<&Band> = self.bands.values().collect();
        Ok(bands.choose(&mut thread_rng()).map(|band| (*band).clone()))
    }

    fn albums_for_band(&self, id: BandId) -> Result<Vec<Album>> {
        let mut albums: Vec<Album> = self
            .albums
            .values()
            .filter(|album| album.band_id == id)
            .cloned()
            .collect();
        albums.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.name.cmp(&b.name)));
        Ok(albums)
    }

    fn album_by_id(&self, id: AlbumId) -> Result<Album> {
        self.albums
            .get(&id)
            .cloned()
            .ok_or(StereoError::AlbumNotFound(id))
    }

    fn random_album(&self) -> Result<Option<Album>> {
        let albums: Vec<&Album> = self.albums.values().collect();
        Ok(albums.choose(&mut thread_rng()).map(|album| (*album).clone()))
    }

    fn all_years(&self) -> Result<Vec<Year>> {
        let years: BTreeSet<Year> = self.songs.iter().filter_map(|song| song.year).collect();
        Ok(years.into_iter().collect())
    }

    fn songs_for_band(&self, id: BandId, order: SongOrder) -> Result<Vec<Song>> {
        let songs = match order {
            SongOrder::Shuffled => sample(self.band_songs(id), usize::MAX),
            SongOrder::Limited(max) => sample(self.band_songs(id), max),
            SongOrder::Ordered => {
                let mut songs: Vec<Song> = self.band_songs(id).cloned().collect();
                // Untagged years sort first, matching the SQL store's NULL ordering
                songs.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.path.cmp(&b.path)));
                songs
            }
        };
        Ok(songs)
    }

    fn songs_for_album(&self, id: AlbumId) -> Result<Vec<Song>> {
        let mut songs: Vec<Song> = self
            .songs
            .iter()
            .filter(|song| song.album_id == Some(id))
            .cloned()
            .collect();
        songs.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(songs)
    }

    fn random_song_batch(&self, size: usize) -> Result<Vec<Song>> {
        Ok(sample(self.songs.iter(), size))
    }

    fn random_song_batch_for_year_range(
        &self,
        first: Year,
        last: Year,
        size: usize,
    ) -> Result<Vec<Song>> {
        let in_range = self
            .songs
            .iter()
            .filter(|song| song.year.is_some_and(|year| year >= first && year <= last));
        Ok(sample(in_range, size))
    }

    fn has_songs(&self) -> Result<bool> {
        Ok(!self.songs.is_empty())
    }
}
