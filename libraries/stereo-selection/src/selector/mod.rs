//! Play-mode selectors
//!
//! A `Selector` is the active play mode. It owns exactly one song provider and
//! swaps it whenever a sub-mode change or resync needs different source data.

mod album;
mod band;
mod collection;
mod year;

pub use album::AlbumSelector;
pub use band::BandSelector;
pub use collection::CollectionSelector;
pub use year::{decade_start, YearSelector};

use crate::config::SelectionConfig;
use crate::mode::{PlayMode, SubModeLabel};
use crate::providers::ProviderKind;
use std::fmt;
use std::sync::Arc;
use stereo_core::{AlbumId, BandId, Catalog, Result, Song, SongId, SongInfo, Year};

/// What every selector needs to build providers
#[derive(Clone)]
pub struct SelectionContext {
    catalog: Arc<dyn Catalog>,
    config: SelectionConfig,
}

impl SelectionContext {
    pub fn new(catalog: Arc<dyn Catalog>, config: SelectionConfig) -> Self {
        Self { catalog, config }
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }
}

/// The active play mode and its provider
pub enum Selector {
    Collection(CollectionSelector),
    Band(BandSelector),
    Album(AlbumSelector),
    Year(YearSelector),
}

impl Selector {
    /// Full shuffle over the whole collection
    pub fn collection(ctx: &SelectionContext) -> Self {
        Self::Collection(CollectionSelector::new(ctx.clone()))
    }

    /// Shuffle within one band
    pub fn band(ctx: &SelectionContext, band_id: BandId) -> Self {
        Self::Band(BandSelector::new(ctx.clone(), band_id))
    }

    /// One album, resuming after `after` when given
    pub fn album(ctx: &SelectionContext, album_id: AlbumId, after: Option<SongId>) -> Result<Self> {
        Ok(Self::Album(AlbumSelector::new(ctx.clone(), album_id, after)?))
    }

    /// Songs from a single year
    pub fn year(ctx: &SelectionContext, year: Year) -> Self {
        Self::Year(YearSelector::new(ctx.clone(), year))
    }

    pub fn mode(&self) -> PlayMode {
        match self {
            Self::Collection(_) => PlayMode::Shuffle,
            Self::Band(_) => PlayMode::Band,
            Self::Album(_) => PlayMode::Album,
            Self::Year(_) => PlayMode::Year,
        }
    }

    pub fn sub_mode(&self) -> SubModeLabel {
        match self {
            Self::Collection(selector) => selector.sub_mode().label(),
            Self::Band(selector) => selector.sub_mode(),
            Self::Album(_) => SubModeLabel::None,
            Self::Year(selector) => selector.sub_mode(),
        }
    }

    pub fn provider_kind(&self) -> ProviderKind {
        match self {
            Self::Collection(selector) => selector.provider_kind(),
            Self::Band(selector) => selector.provider_kind(),
            Self::Album(selector) => selector.provider_kind(),
            Self::Year(selector) => selector.provider_kind(),
        }
    }

    /// Ask the active provider for its next batch
    pub fn next_batch(&mut self) -> Result<Vec<Song>> {
        let batch = match self {
            Self::Collection(selector) => selector.next_batch(),
            Self::Band(selector) => selector.next_batch(),
            Self::Album(selector) => selector.next_batch(),
            Self::Year(selector) => selector.next_batch(),
        }?;
        tracing::debug!(mode = %self.mode(), batch_len = batch.len(), "Provider batch");
        Ok(batch)
    }

    /// Advance to the next sub-mode. Returns `false` when nothing changed.
    pub fn change_sub_mode(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        match self {
            Self::Collection(selector) => selector.change_sub_mode(current),
            Self::Band(selector) => selector.change_sub_mode(current),
            Self::Album(_) => Ok(false),
            Self::Year(selector) => Ok(selector.change_sub_mode(current)),
        }
    }

    /// Jump back relative to the current song. Returns `false` when nothing changed.
    pub fn resync_backward(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        match self {
            Self::Collection(_) => Ok(false),
            Self::Band(selector) => selector.resync_backward(current),
            Self::Album(selector) => selector.restart().map(|()| true),
            Self::Year(selector) => Ok(selector.shift(-1)),
        }
    }

    /// Jump ahead relative to the current song. Returns `false` when nothing changed.
    pub fn resync_forward(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        match self {
            Self::Collection(_) | Self::Album(_) => Ok(false),
            Self::Band(selector) => selector.resync_forward(current),
            Self::Year(selector) => Ok(selector.shift(1)),
        }
    }
}

impl fmt::Debug for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("mode", &self.mode())
            .field("sub_mode", &self.sub_mode())
            .field("provider", &self.provider_kind())
            .finish()
    }
}
