use super::SelectionContext;
use crate::providers::{AlbumProvider, ProviderKind, SongProvider};
use stereo_core::{AlbumId, Result, Song, SongId};

/// Album mode: one album, in order, once
pub struct AlbumSelector {
    ctx: SelectionContext,
    album_id: AlbumId,
    provider: AlbumProvider,
}

impl AlbumSelector {
    pub fn new(ctx: SelectionContext, album_id: AlbumId, after: Option<SongId>) -> Result<Self> {
        let provider = AlbumProvider::new(ctx.catalog().as_ref(), album_id, after)?;
        Ok(Self {
            ctx,
            album_id,
            provider,
        })
    }

    pub fn album_id(&self) -> AlbumId {
        self.album_id
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub(super) fn next_batch(&mut self) -> Result<Vec<Song>> {
        self.provider.next_batch()
    }

    /// Start over from track one
    pub(super) fn restart(&mut self) -> Result<()> {
        self.provider = AlbumProvider::new(self.ctx.catalog().as_ref(), self.album_id, None)?;
        Ok(())
    }
}
