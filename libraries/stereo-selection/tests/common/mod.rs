//! Shared catalog fixtures

use std::sync::Arc;
use stereo_core::{Album, Band, Catalog, MemoryCatalog, Song, SongInfo};
use stereo_selection::{SelectionConfig, SelectionContext};

pub const BAND_A: i64 = 1;
pub const BAND_B: i64 = 2;
pub const BAND_C: i64 = 3;
pub const ALBUM_X: i64 = 10;
pub const ALBUM_FIRST: i64 = 30;
pub const ALBUM_SECOND: i64 = 31;

/// Band A: two loose songs. Band B: album X, three songs from 1999 to 2001.
/// Band C: two albums of two songs each (1985, 1987).
pub fn catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.add_band(Band::new(BAND_A, "Band A"));
    catalog.add_band(Band::new(BAND_B, "Band B"));
    catalog.add_band(Band::new(BAND_C, "Band C"));

    catalog
        .add_album(Album::new(ALBUM_X, "Album X", BAND_B, Some(1999)))
        .unwrap();
    catalog
        .add_album(Album::new(ALBUM_SECOND, "Second", BAND_C, Some(1987)))
        .unwrap();
    catalog
        .add_album(Album::new(ALBUM_FIRST, "First", BAND_C, Some(1985)))
        .unwrap();

    let songs = [
        Song::new(1, "a-one", "/a/one.mp3", BAND_A, None, None),
        Song::new(2, "a-two", "/a/two.mp3", BAND_A, None, None),
        Song::new(11, "x-1", "/b/x/01.mp3", BAND_B, Some(ALBUM_X), Some(1999)),
        Song::new(12, "x-2", "/b/x/02.mp3", BAND_B, Some(ALBUM_X), Some(2000)),
        Song::new(13, "x-3", "/b/x/03.mp3", BAND_B, Some(ALBUM_X), Some(2001)),
        Song::new(31, "first-1", "/c/first/01.mp3", BAND_C, Some(ALBUM_FIRST), Some(1985)),
        Song::new(32, "first-2", "/c/first/02.mp3", BAND_C, Some(ALBUM_FIRST), Some(1985)),
        Song::new(33, "second-1", "/c/second/01.mp3", BAND_C, Some(ALBUM_SECOND), Some(1987)),
        Song::new(34, "second-2", "/c/second/02.mp3", BAND_C, Some(ALBUM_SECOND), Some(1987)),
    ];
    for song in songs {
        catalog.add_song(song).unwrap();
    }
    catalog
}

pub fn shared_catalog() -> Arc<dyn Catalog> {
    Arc::new(catalog())
}

pub fn context() -> SelectionContext {
    SelectionContext::new(shared_catalog(), SelectionConfig::default())
}

/// Look a song up by id and attach its band and album
pub fn info(ctx: &SelectionContext, song_id: i64) -> SongInfo {
    let catalog = ctx.catalog();
    let song = catalog
        .random_song_batch(usize::MAX)
        .unwrap()
        .into_iter()
        .find(|song| song.id == song_id)
        .unwrap();
    catalog.song_info(song).unwrap()
}

pub fn ids(songs: &[Song]) -> Vec<i64> {
    songs.iter().map(|song| song.id).collect()
}
