use super::SelectionContext;
use crate::mode::CollectionSubMode;
use crate::providers::{
    BlockPartyProvider, DoubleShotProvider, ProviderKind, ShuffleProvider, SongProvider,
};
use stereo_core::{BandId, Result, Song, SongInfo};

/// Shuffle mode: full shuffle, double shot, block party
pub struct CollectionSelector {
    ctx: SelectionContext,
    sub_mode: CollectionSubMode,
    provider: Box<dyn SongProvider>,
}

impl CollectionSelector {
    pub fn new(ctx: SelectionContext) -> Self {
        let provider = Box::new(ShuffleProvider::new(
            ctx.catalog().clone(),
            ctx.config().shuffle_batch_size,
        ));
        Self {
            ctx,
            sub_mode: CollectionSubMode::FullShuffle,
            provider,
        }
    }

    /// Start directly in `sub_mode`; `seed_band` seeds double shot
    pub fn with_sub_mode(
        ctx: SelectionContext,
        sub_mode: CollectionSubMode,
        seed_band: Option<BandId>,
    ) -> Result<Self> {
        let provider = provider_for(&ctx, sub_mode, seed_band)?;
        Ok(Self {
            ctx,
            sub_mode,
            provider,
        })
    }

    pub fn sub_mode(&self) -> CollectionSubMode {
        self.sub_mode
    }

    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub(super) fn next_batch(&mut self) -> Result<Vec<Song>> {
        self.provider.next_batch()
    }

    pub(super) fn change_sub_mode(&mut self, current: Option<&SongInfo>) -> Result<bool> {
        let next = self.sub_mode.next();
        self.provider = provider_for(&self.ctx, next, current.map(|info| info.band.id))?;
        self.sub_mode = next;
        tracing::debug!(sub_mode = ?next, "Collection sub-mode changed");
        Ok(true)
    }
}

fn provider_for(
    ctx: &SelectionContext,
    sub_mode: CollectionSubMode,
    seed_band: Option<BandId>,
) -> Result<Box<dyn SongProvider>> {
    let catalog = ctx.catalog().clone();
    let provider: Box<dyn SongProvider> = match sub_mode {
        CollectionSubMode::FullShuffle => Box::new(ShuffleProvider::new(
            catalog,
            ctx.config().shuffle_batch_size,
        )),
        CollectionSubMode::DoubleShot => Box::new(DoubleShotProvider::new(catalog, seed_band)?),
        CollectionSubMode::BlockParty => Box::new(BlockPartyProvider::new(
            catalog,
            ctx.config().block_party_size,
        )),
    };
    Ok(provider)
}
