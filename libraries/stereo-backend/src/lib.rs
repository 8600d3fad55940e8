//! Stereo Backend
//!
//! The music controller and everything around it:
//!
//! - [`spawn_controller`] starts the controller actor and returns a
//!   [`ControllerHandle`] for queuing requests from any thread
//! - [`MusicPlayer`] is what the controller drives; [`QueuePlayer`] is an
//!   in-memory implementation
//! - [`UiNotifier`] receives status changes, lists and error reports
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stereo_backend::{spawn_controller, BackendConfig, ChannelNotifier, QueuePlayer, UiEvent};
//! use stereo_core::{Band, MemoryCatalog, Song};
//!
//! let mut catalog = MemoryCatalog::new();
//! catalog.add_band(Band::new(1, "Band A"));
//! catalog.add_song(Song::new(1, "One", "/a/1.mp3", 1, None, None)).unwrap();
//!
//! let (notifier, events) = ChannelNotifier::new();
//! let handle = spawn_controller(
//!     Arc::new(catalog),
//!     Box::new(notifier),
//!     QueuePlayer::factory(false),
//!     &BackendConfig::default(),
//! )
//! .unwrap();
//!
//! handle.api().toggle_play_pause();
//! let playing = events
//!     .iter()
//!     .find_map(|event| match event {
//!         UiEvent::Status(status) if status.is_playing => Some(status),
//!         _ => None,
//!     })
//!     .unwrap();
//! assert_eq!(playing.current_song.unwrap().song.id, 1);
//!
//! handle.abandon();
//! handle.join().unwrap();
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod notifier;
pub mod player;
pub mod queue;
pub mod status;

pub use config::BackendConfig;
pub use controller::{spawn_controller, ControllerHandle, MusicController};
pub use error::{BackendError, Result};
pub use notifier::{ChannelNotifier, UiEvent, UiNotifier};
pub use player::{MusicPlayer, PlayerEvent, PlayerEvents, PlayerFactory};
pub use queue::{PlaybackQueue, QueuePlayer};
pub use status::BackendStatus;
