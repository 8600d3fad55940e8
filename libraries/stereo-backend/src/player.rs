//! Player interface
//!
//! The controller drives a `MusicPlayer` and hears back from it through
//! `PlayerEvents`. Events are queued onto the controller's mailbox, never delivered
//! by re-entering the controller.

use crate::error::Result;
use crossbeam_channel::{unbounded, Receiver, Sender};
use stereo_actor::{CallbackId, Mailbox};
use stereo_core::SongInfo;

/// Something that can play a queue of songs
///
/// Lives on the controller thread for its whole life, so it need not be `Send`.
pub trait MusicPlayer {
    /// Load upcoming songs. With `replace_current` the current song is dropped and the
    /// first new song loaded immediately; otherwise the current song plays on.
    fn set_playlist(&mut self, songs: Vec<SongInfo>, replace_current: bool) -> Result<()>;

    /// Load the next queued song
    fn prepare_next_song(&mut self) -> Result<()>;

    /// Start playing (no-op if already playing)
    fn play(&mut self) -> Result<()>;

    /// Pause (no-op if already paused)
    fn pause(&mut self) -> Result<()>;

    /// Seek back to the start of the current song
    fn restart_current(&mut self) -> Result<()>;

    /// Song that is playing, or that will play on resume
    fn current_song(&self) -> Option<SongInfo>;

    /// Number of songs queued after the current one
    fn upcoming_len(&self) -> usize;
}

/// Builds the player on the controller thread
pub type PlayerFactory = Box<dyn FnOnce(PlayerEvents) -> Result<Box<dyn MusicPlayer>> + Send>;

/// Notifications a player sends back to its controller
///
/// They are queued behind any request already waiting, so the controller checks the
/// player's state again when one arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerEvent {
    /// A new song became current
    SongAdvanced,

    /// The last queued song was loaded; more are needed
    QueueEmptied,
}

#[derive(Clone)]
enum EventSink {
    Controller {
        mailbox: Mailbox,
        song_advanced: CallbackId,
        queue_emptied: CallbackId,
    },
    Channel(Sender<PlayerEvent>),
}

/// Handle a player uses to report events
#[derive(Clone)]
pub struct PlayerEvents {
    sink: EventSink,
}

impl PlayerEvents {
    pub(crate) fn controller(
        mailbox: Mailbox,
        song_advanced: CallbackId,
        queue_emptied: CallbackId,
    ) -> Self {
        Self {
            sink: EventSink::Controller {
                mailbox,
                song_advanced,
                queue_emptied,
            },
        }
    }

    /// Events delivered to a plain channel, for driving a player without a controller
    pub fn channel() -> (Self, Receiver<PlayerEvent>) {
        let (sender, receiver) = unbounded();
        (
            Self {
                sink: EventSink::Channel(sender),
            },
            receiver,
        )
    }

    /// Report that a new song is current
    pub fn song_advanced(&self) {
        self.emit(PlayerEvent::SongAdvanced);
    }

    /// Report that the queue has run dry
    pub fn queue_emptied(&self) {
        self.emit(PlayerEvent::QueueEmptied);
    }

    fn emit(&self, event: PlayerEvent) {
        match &self.sink {
            EventSink::Controller {
                mailbox,
                song_advanced,
                queue_emptied,
            } => {
                let callback_id = match event {
                    PlayerEvent::SongAdvanced => *song_advanced,
                    PlayerEvent::QueueEmptied => *queue_emptied,
                };
                mailbox.send_unit(callback_id);
            }
            EventSink::Channel(sender) => {
                if sender.send(event).is_err() {
                    tracing::debug!(?event, "Player event receiver dropped");
                }
            }
        }
    }
}
