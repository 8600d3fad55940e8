use super::SelectionContext;
use crate::mode::SubModeLabel;
use crate::providers::{EraProvider, ProviderKind, SongProvider};
use stereo_core::{Result, Song, SongInfo, Year};

/// First year of the decade containing `year`
pub fn decade_start(year: Year) -> Year {
    year.saturating_sub(year.rem_euclid(10))
}

/// Year mode: a single year or its whole decade
pub struct YearSelector {
    ctx: SelectionContext,
    year: Year,
    decade: bool,
    provider: EraProvider,
}

impl YearSelector {
    pub fn new(ctx: SelectionContext, year: Year) -> Self {
        let provider = EraProvider::year(ctx.catalog().clone(), year, ctx.config().era_batch_size);
        Self {
            ctx,
            year,
            decade: false,
            provider,
        }
    }

    /// Year the selector is locked to
    pub fn year(&self) -> Year {
        self.year
    }

    pub fn is_decade(&self) -> bool {
        self.decade
    }

    /// Inclusive range songs are drawn from
    pub fn year_range(&self) -> (Year, Year) {
        self.provider.range()
    }

    pub fn sub_mode(&self) -> SubModeLabel {
        if self.decade {
            SubModeLabel::Decade
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

    /// Toggle single year and decade around the current song's year
    ///
    /// Nothing changes when there is no current song or it has no year.
    pub(super) fn change_sub_mode(&mut self, current: Option<&SongInfo>) -> bool {
        let Some(year) = current.and_then(|info| info.song.year) else {
            return false;
        };
        self.year = year;
        self.decade = !self.decade;
        self.rebuild();
        tracing::debug!(year = self.year, decade = self.decade, "Year sub-mode changed");
        true
    }

    /// Move by one year, or one decade in decade mode
    ///
    /// Returns `false` without moving when the target year is not representable.
    pub(super) fn shift(&mut self, direction: Year) -> bool {
        let step = if self.decade { 10 } else { 1 };
        let Some(year) = direction
            .checked_mul(step)
            .and_then(|delta| self.year.checked_add(delta))
        else {
            return false;
        };
        self.year = year;
        self.rebuild();
        true
    }

    fn rebuild(&mut self) {
        let catalog = self.ctx.catalog().clone();
        let batch_size = self.ctx.config().era_batch_size;
        self.provider = if self.decade {
            EraProvider::decade(catalog, decade_start(self.year), batch_size)
        } else {
            EraProvider::year(catalog, self.year, batch_size)
        };
    }
}
