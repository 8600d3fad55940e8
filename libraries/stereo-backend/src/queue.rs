//! In-memory player
//!
//! `PlaybackQueue` holds the current song and what comes after it. `QueuePlayer`
//! drives it like a real player would, minus the audio: it reports song changes
//! and an empty queue exactly when a device-backed player would.

use crate::error::{BackendError, Result};
use crate::player::{MusicPlayer, PlayerEvents, PlayerFactory};
use std::collections::VecDeque;
use stereo_core::SongInfo;
use tracing::{debug, warn};

/// Current song plus the songs queued after it
#[derive(Debug, Clone, Default)]
pub struct PlaybackQueue {
    current: Option<SongInfo>,
    upcoming: VecDeque<SongInfo>,
}

impl PlaybackQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything queued after the current song
    pub fn replace_upcoming(&mut self, songs: Vec<SongInfo>) {
        self.upcoming = songs.into();
    }

    /// Make the next queued song current. Returns `None` (and keeps the current
    /// song) when nothing is queued.
    pub fn advance(&mut self) -> Option<&SongInfo> {
        let next = self.upcoming.pop_front()?;
        self.current = Some(next);
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&SongInfo> {
        self.current.as_ref()
    }

    pub fn upcoming(&self) -> impl Iterator<Item = &SongInfo> {
        self.upcoming.iter()
    }

    /// Number of songs queued after the current one
    pub fn len(&self) -> usize {
        self.upcoming.len()
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty()
    }
}

/// Player backed by a `PlaybackQueue`, with no audio output
pub struct QueuePlayer {
    queue: PlaybackQueue,
    events: PlayerEvents,
    playing: bool,
    restarts: usize,
    verify_files: bool,
}

impl QueuePlayer {
    pub fn new(events: PlayerEvents) -> Self {
        Self {
            queue: PlaybackQueue::new(),
            events,
            playing: false,
            restarts: 0,
            verify_files: false,
        }
    }

    /// Factory for the controller, building a `QueuePlayer` on the controller thread
    pub fn factory(verify_files: bool) -> PlayerFactory {
        Box::new(move |events| {
            let player = QueuePlayer::new(events).verify_files(verify_files);
            Ok(Box::new(player) as Box<dyn MusicPlayer>)
        })
    }

    /// Refuse to load songs whose file is missing, like a device-backed player
    #[must_use]
    pub fn verify_files(mut self, verify: bool) -> Self {
        self.verify_files = verify;
        self
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn queue(&self) -> &PlaybackQueue {
        &self.queue
    }

    /// How many times the current song was restarted
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// The current song reached its end
    pub fn song_finished(&mut self) -> Result<()> {
        if self.playing {
            self.prepare_next_song()
        } else {
            Ok(())
        }
    }
}

impl MusicPlayer for QueuePlayer {
    fn set_playlist(&mut self, songs: Vec<SongInfo>, replace_current: bool) -> Result<()> {
        debug!(songs = songs.len(), replace_current, "Replacing contents of playlist");
        self.queue.replace_upcoming(songs);
        if replace_current {
            self.prepare_next_song()?;
        }
        Ok(())
    }

    fn prepare_next_song(&mut self) -> Result<()> {
        let Some(info) = self.queue.advance() else {
            warn!("Playlist is empty, no song to load");
            return Ok(());
        };
        self.restarts = 0;

        let path = info.song.path.clone();
        let loaded = !self.verify_files || path.exists();
        if loaded {
            debug!(path = %path.display(), "Loaded song");
            self.events.song_advanced();
        }

        if self.queue.is_empty() {
            debug!("Playlist depleted");
            self.events.queue_emptied();
        }

        if loaded {
            Ok(())
        } else {
            Err(BackendError::player(format!(
                "song file is not readable: {}",
                path.display()
            )))
        }
    }

    fn play(&mut self) -> Result<()> {
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.playing = false;
        Ok(())
    }

    fn restart_current(&mut self) -> Result<()> {
        if self.queue.current().is_some() {
            self.restarts += 1;
        }
        Ok(())
    }

    fn current_song(&self) -> Option<SongInfo> {
        self.queue.current().cloned()
    }

    fn upcoming_len(&self) -> usize {
        self.queue.len()
    }
}
