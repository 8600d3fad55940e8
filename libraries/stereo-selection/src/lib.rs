//! Stereo Selection
//!
//! Decides what plays next. A [`Selector`] is the active play mode (shuffle, band,
//! album or year) and owns one [`SongProvider`] that produces batches of songs.
//!
//! # Play modes
//!
//! | Mode    | Sub-modes                                 | Providers                          |
//! |---------|-------------------------------------------|------------------------------------|
//! | Shuffle | full shuffle → double shot → block party | Shuffle, DoubleShot, BlockParty    |
//! | Band    | shuffle ↔ sequential                      | BandShuffle, BandSequential        |
//! | Album   | none                                      | Album                              |
//! | Year    | single year ↔ decade                      | Era                                |
//!
//! Band-sequential and album providers are single-shot: they return their whole
//! playlist once and then nothing. An empty batch tells the caller to fall back to
//! shuffle.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stereo_core::{Band, MemoryCatalog, Song};
//! use stereo_selection::{PlayMode, SelectionConfig, SelectionContext, Selector};
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_band(Band::new(1, "Band A"));
//! catalog.add_song(Song::new(1, "One", "/a/1.mp3", 1, None, Some(1999))).unwrap();
//!
//! let ctx = SelectionContext::new(Arc::new(catalog), SelectionConfig::default());
//! let mut selector = Selector::collection(&ctx);
//!
//! assert_eq!(selector.mode(), PlayMode::Shuffle);
//! assert_eq!(selector.next_batch().unwrap().len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod band_choice;
pub mod config;
pub mod mode;
pub mod providers;
pub mod selector;
pub mod split;

pub use band_choice::{choose_band, choose_band_with, BandStrategy};
pub use config::SelectionConfig;
pub use mode::{CollectionSubMode, PlayMode, SubModeLabel};
pub use providers::{
    AlbumProvider, BandSequentialProvider, BandShuffleProvider, BlockPartyProvider,
    DoubleShotProvider, EraProvider, ProviderKind, ShuffleProvider, SongProvider,
};
pub use selector::{
    decade_start, AlbumSelector, BandSelector, CollectionSelector, SelectionContext, Selector,
    YearSelector,
};
pub use split::{split_list, split_songs};
