use super::{OneShot, ProviderKind, SongProvider};
use crate::split::split_songs;
use stereo_core::{AlbumId, Catalog, Result, Song, SongId};

/// One album in track order, handed over once
///
/// With a starting song, play resumes at the track after it and wraps around to the
/// top, so every track plays exactly once.
pub struct AlbumProvider {
    album_id: AlbumId,
    playlist: OneShot,
}

impl AlbumProvider {
    pub fn new(catalog: &dyn Catalog, album_id: AlbumId, after: Option<SongId>) -> Result<Self> {
        let tracks = catalog.songs_for_album(album_id)?;
        let playlist = match after {
            Some(song_id) => split_songs(tracks, song_id, false),
            None => tracks,
        };
        Ok(Self {
            album_id,
            playlist: OneShot::new(playlist),
        })
    }

    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    /// Songs not yet handed over
    pub fn remaining(&self) -> &[Song] {
        self.playlist.remaining()
    }
}

impl SongProvider for AlbumProvider {
    fn next_batch(&mut self) -> Result<Vec<Song>> {
        Ok(self.playlist.take())
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Album
    }
}
