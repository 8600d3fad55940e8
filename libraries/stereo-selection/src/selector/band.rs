use super::SelectionContext;
use crate::mode::SubModeLabel;
use crate::providers::{BandSequentialProvider, BandShuffleProvider, ProviderKind, SongProvider};
use stereo_core::{BandId, Result, Song, SongInfo};

/// Band mode: shuffle or play the discography in order
pub struct BandSelector {
    ctx: SelectionContext,
    band_id: BandId,
    sequential: bool,
    provider: Box<dyn SongProvider>,
}

impl BandSelector {
    pub fn new(ctx: SelectionContext, band_id: BandId) -> Self {
        let provider = Box::new(BandShuffleProvider::new(ctx.catalog().clone(), band_id));
        Self {
            ctx,
            band_id,
            sequential: false,
            provider,
        }
    }

    pub fn band_id(&self) -> BandId {
        self.band_id
    }

    pub fn is_sequential(&self) -> bool {
        self.sequential
    }

    pub fn sub_mode(&self) -> SubModeLabel {
        if self.sequential {
            SubModeLabel::Sequential
        } else {
            SubModeLabel::None
        }
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub(super) fn next_batch(&mut self) -> Result<Vec<Song>> {
        self.provider.next_batch()
    }

    /// Toggle shuffle/sequential. Sequential starts right after the current song.
    pub(super) fn change_sub_mode(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        let provider: Box<dyn SongProvider> = if self.sequential {
            Box::new(BandShuffleProvider::new(self.ctx.catalog().clone(), self.band_id))
        } else {
            Box::new(BandSequentialProvider::new(
                self.ctx.catalog().as_ref(),
                self.band_id,
                current.map(|info| info.song.id),
                false,
            )?)
        };
        self.provider = provider;
        self.sequential = !self.sequential;
        tracing::debug!(
            band_id = self.band_id,
            sequential = self.sequential,
            "Band sub-mode changed"
        );
        Ok(true)
    }

    /// Sequential only: back to the start of the current song's album
    pub(super) fn resync_backward(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        if !self.sequential {
            return Ok(false);
        }
        let Some(album) = current.and_then(|info| info.album.as_ref()) else {
            return Ok(false);
        };

        self.provider = Box::new(BandSequentialProvider::at_album_start(
            self.ctx.catalog().as_ref(),
            album,
        )?);
        Ok(true)
    }

    /// Sequential only: on to the start of the band's next album
    pub(super) fn resync_forward(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        if !self.sequential {
            return Ok(false);
        }
        let Some(album) = current.and_then(|info| info.album.as_ref()) else {
            return Ok(false);
        };

        // Linear scan of the band's albums on every skip
        let catalog = self.ctx.catalog().as_ref();
        let albums = catalog.albums_for_band(self.band_id)?;
        let next_album = albums
            .iter()
            .position(|candidate| candidate.id == album.id)
            .and_then(|index| albums.get(index + 1));

        match next_album {
            Some(next) => {
                self.provider = Box::new(BandSequentialProvider::at_album_start(catalog, next)?);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
