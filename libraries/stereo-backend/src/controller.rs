//! Music controller
//!
//! Decides what is (or isn't) playing. Runs as an actor: every public operation on
//! `ControllerHandle` is queued and handled one at a time on the controller thread,
//! which owns the player and the active selector.
//!
//! Whenever the active provider runs dry the controller falls back to full shuffle,
//! so a non-empty library never leaves the player without songs.

use crate::config::BackendConfig;
use crate::error::{BackendError, Result};
use crate::notifier::UiNotifier;
use crate::player::{MusicPlayer, PlayerEvents, PlayerFactory};
use crate::status::BackendStatus;
use std::sync::Arc;
use stereo_actor::{Actor, ActorHandle, CallbackId, Mailbox, Registry};
use stereo_core::{AlbumId, BandId, Catalog, SongInfo, Year};
use stereo_selection::{
    CollectionSelector, CollectionSubMode, PlayMode, SelectionContext, Selector,
};
use tracing::{debug, error, info, warn};

/// Callback ids for every controller operation
#[derive(Debug, Clone, Copy)]
struct Callbacks {
    toggle_play_pause: CallbackId,
    next_song: CallbackId,
    restart_current_song: CallbackId,
    skip_forward: CallbackId,
    skip_backward: CallbackId,
    toggle_band_mode: CallbackId,
    toggle_album_mode: CallbackId,
    toggle_year_mode: CallbackId,
    lock_specific_band: CallbackId,
    lock_specific_album: CallbackId,
    lock_specific_year: CallbackId,
    change_sub_mode: CallbackId,
    request_band_list: CallbackId,
    request_album_list: CallbackId,
    request_year_list: CallbackId,
    force_pause: CallbackId,
}

/// Thread-safe front of the controller
///
/// Every method queues a request and returns immediately. Results come back through
/// the `UiNotifier`.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    mailbox: Mailbox,
    callbacks: Callbacks,
}

impl ControllerHandle {
    pub fn toggle_play_pause(&self) {
        self.mailbox.send_unit(self.callbacks.toggle_play_pause);
    }

    /// Skip to the next song in the queue
    pub fn next_song(&self) {
        self.mailbox.send_unit(self.callbacks.next_song);
    }

    pub fn restart_current_song(&self) {
        self.mailbox.send_unit(self.callbacks.restart_current_song);
    }

    /// Jump ahead within the current mode (next album, next year)
    pub fn skip_forward(&self) {
        self.mailbox.send_unit(self.callbacks.skip_forward);
    }

    /// Jump back within the current mode (album start, previous year)
    pub fn skip_backward(&self) {
        self.mailbox.send_unit(self.callbacks.skip_backward);
    }

    /// Lock onto the current song's band, or back to shuffle if already locked
    pub fn toggle_band_mode(&self) {
        self.mailbox.send_unit(self.callbacks.toggle_band_mode);
    }

    /// Lock onto the current song's album, or back to shuffle if already locked
    pub fn toggle_album_mode(&self) {
        self.mailbox.send_unit(self.callbacks.toggle_album_mode);
    }

    /// Lock onto the current song's year, or back to shuffle if already locked
    pub fn toggle_year_mode(&self) {
        self.mailbox.send_unit(self.callbacks.toggle_year_mode);
    }

    pub fn lock_specific_band(&self, band_id: BandId) {
        self.mailbox.send(self.callbacks.lock_specific_band, band_id);
    }

    /// Play an album from its first track
    pub fn lock_specific_album(&self, album_id: AlbumId) {
        self.mailbox.send(self.callbacks.lock_specific_album, album_id);
    }

    pub fn lock_specific_year(&self, year: Year) {
        self.mailbox.send(self.callbacks.lock_specific_year, year);
    }

    pub fn change_sub_mode(&self) {
        self.mailbox.send_unit(self.callbacks.change_sub_mode);
    }

    pub fn request_band_list(&self) {
        self.mailbox.send_unit(self.callbacks.request_band_list);
    }

    /// Albums by the current song's band
    pub fn request_album_list(&self) {
        self.mailbox.send_unit(self.callbacks.request_album_list);
    }

    pub fn request_year_list(&self) {
        self.mailbox.send_unit(self.callbacks.request_year_list);
    }

    /// Pause regardless of the current state (e.g. headphones unplugged)
    pub fn force_pause(&self) {
        self.mailbox.send_unit(self.callbacks.force_pause);
    }
}

/// Player, selector and play state once the library is known to be usable
struct Session {
    player: Box<dyn MusicPlayer>,
    selector: Selector,
    playing: bool,
}

impl Session {
    fn status(&self) -> BackendStatus {
        BackendStatus {
            mode: self.selector.mode(),
            sub_mode: self.selector.sub_mode(),
            is_playing: self.playing,
            current_song: self.player.current_song(),
        }
    }

    fn emit_status(&self, notifier: &dyn UiNotifier) {
        let status = self.status();
        debug!(mode = %status.mode, sub_mode = ?status.sub_mode, playing = status.is_playing, "Status changed");
        notifier.on_backend_status_change(status);
    }

    /// Hand the next batch to the player, falling back to shuffle when the active
    /// provider is out of songs. Returns `true` if the fallback happened.
    fn replenish(&mut self, ctx: &SelectionContext, replace_current: bool) -> Result<bool> {
        let mut batch = self.selector.next_batch()?;
        let mut fell_back = false;

        if batch.is_empty() {
            debug!(mode = %self.selector.mode(), "Provider returned nothing, changing to shuffle");
            self.selector = Selector::collection(ctx);
            batch = self.selector.next_batch()?;
            fell_back = true;
        }

        let catalog = ctx.catalog();
        let playlist = batch
            .into_iter()
            .map(|song| catalog.song_info(song))
            .collect::<stereo_core::Result<Vec<SongInfo>>>()?;

        debug!(batch_len = playlist.len(), replace_current, "Replenishing playlist");
        self.player.set_playlist(playlist, replace_current)?;
        Ok(fell_back)
    }

    /// Switch to `selector`, refill, and report the result
    fn transition(
        &mut self,
        ctx: &SelectionContext,
        notifier: &dyn UiNotifier,
        selector: Selector,
        replace_current: bool,
    ) -> Result<()> {
        info!(from = %self.selector.mode(), to = %selector.mode(), "Changing play mode");
        self.selector = selector;
        self.replenish(ctx, replace_current)?;
        self.emit_status(notifier);
        Ok(())
    }

    fn transition_to_shuffle(&mut self, ctx: &SelectionContext, notifier: &dyn UiNotifier) -> Result<()> {
        self.transition(ctx, notifier, Selector::collection(ctx), false)
    }
}

/// The controller actor
pub struct MusicController {
    ctx: SelectionContext,
    notifier: Box<dyn UiNotifier>,
    startup_sub_mode: CollectionSubMode,
    factory: Option<PlayerFactory>,
    events: Option<PlayerEvents>,
    session: Option<Session>,
}

impl MusicController {
    pub fn new(
        ctx: SelectionContext,
        notifier: Box<dyn UiNotifier>,
        factory: PlayerFactory,
        startup_sub_mode: CollectionSubMode,
    ) -> Self {
        Self {
            ctx,
            notifier,
            startup_sub_mode,
            factory: Some(factory),
            events: None,
            session: None,
        }
    }

    /// Check the library, build the player and queue the first batch
    fn start(&mut self) -> Result<()> {
        if !self.ctx.catalog().has_songs()? {
            warn!("Music library is empty, controller unavailable");
            self.notifier.on_exception_report(BackendError::NoLibrary);
            return Ok(());
        }

        let (Some(factory), Some(events)) = (self.factory.take(), self.events.take()) else {
            return Err(BackendError::player("player was already created"));
        };
        let player = factory(events)?;
        let selector = Selector::Collection(CollectionSelector::with_sub_mode(
            self.ctx.clone(),
            self.startup_sub_mode,
            None,
        )?);

        let session = self.session.insert(Session {
            player,
            selector,
            playing: false,
        });
        session.replenish(&self.ctx, true)?;
        info!(sub_mode = ?self.startup_sub_mode, "Controller started");
        Ok(())
    }

    fn toggle_play_pause(&mut self) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return unavailable("toggle_play_pause");
        };
        if session.playing {
            session.player.pause()?;
            session.playing = false;
        } else {
            session.player.play()?;
            session.playing = true;
        }
        session.emit_status(self.notifier.as_ref());
        Ok(())
    }

    fn next_song(&mut self) -> Result<()> {
        match self.session.as_mut() {
            Some(session) => session.player.prepare_next_song(),
            None => unavailable("next_song"),
        }
    }

    fn restart_current_song(&mut self) -> Result<()> {
        match self.session.as_mut() {
            Some(session) => session.player.restart_current(),
            None => unavailable("restart_current_song"),
        }
    }

    fn skip(&mut self, forward: bool) -> Result<()> {
        let ctx = self.ctx.clone();
        let Some(session) = self.session.as_mut() else {
            return unavailable("skip");
        };
        debug!(forward, "Skipping");

        let current = session.player.current_song();
        let changed = if forward {
            session.selector.resync_forward(current.as_ref())?
        } else {
            session.selector.resync_backward(current.as_ref())?
        };
        if changed && session.replenish(&ctx, true)? {
            session.emit_status(self.notifier.as_ref());
        }
        Ok(())
    }

    fn toggle_mode(&mut self, mode: PlayMode) -> Result<()> {
        let ctx = self.ctx.clone();
        let notifier = self.notifier.as_ref();
        let Some(session) = self.session.as_mut() else {
            warn!(%mode, "Controller unavailable, ignoring mode toggle");
            return Ok(());
        };

        if session.selector.mode() == mode {
            return session.transition_to_shuffle(&ctx, notifier);
        }

        let Some(current) = session.player.current_song() else {
            debug!(%mode, "No current song, ignoring mode toggle");
            return Ok(());
        };
        let selector = match mode {
            PlayMode::Band => Selector::band(&ctx, current.band.id),
            PlayMode::Album => {
                let Some(album) = &current.album else {
                    debug!("Current song has no album, ignoring album lock");
                    return Ok(());
                };
                Selector::album(&ctx, album.id, Some(current.song.id))?
            }
            PlayMode::Year => {
                let Some(year) = current.song.year else {
                    debug!("Current song has no year, ignoring year lock");
                    return Ok(());
                };
                Selector::year(&ctx, year)
            }
            PlayMode::Shuffle => Selector::collection(&ctx),
        };
        session.transition(&ctx, notifier, selector, false)
    }

    fn lock_specific_band(&mut self, band_id: BandId) -> Result<()> {
        let ctx = self.ctx.clone();
        let notifier = self.notifier.as_ref();
        let Some(session) = self.session.as_mut() else {
            warn!(band_id, "Controller unavailable, ignoring band lock");
            return Ok(());
        };

        // Keep the current song if it is already by this band
        let replace_current = session.player.current_song().map(|current| current.band.id) != Some(band_id);
        session.transition(&ctx, notifier, Selector::band(&ctx, band_id), replace_current)
    }

    fn lock_specific_album(&mut self, album_id: AlbumId) -> Result<()> {
        let ctx = self.ctx.clone();
        let notifier = self.notifier.as_ref();
        let Some(session) = self.session.as_mut() else {
            warn!(album_id, "Controller unavailable, ignoring album lock");
            return Ok(());
        };
        let selector = Selector::album(&ctx, album_id, None)?;
        session.transition(&ctx, notifier, selector, true)
    }

    fn lock_specific_year(&mut self, year: Year) -> Result<()> {
        let ctx = self.ctx.clone();
        let notifier = self.notifier.as_ref();
        let Some(session) = self.session.as_mut() else {
            warn!(year, "Controller unavailable, ignoring year lock");
            return Ok(());
        };
        session.transition(&ctx, notifier, Selector::year(&ctx, year), true)
    }

    fn change_sub_mode(&mut self) -> Result<()> {
        let ctx = self.ctx.clone();
        let Some(session) = self.session.as_mut() else {
            return unavailable("change_sub_mode");
        };

        let current = session.player.current_song();
        if session.selector.change_sub_mode(current.as_ref())? {
            session.replenish(&ctx, false)?;
            session.emit_status(self.notifier.as_ref());
        } else {
            debug!(mode = %session.selector.mode(), "Mode has no sub-modes");
        }
        Ok(())
    }

    fn request_band_list(&mut self) -> Result<()> {
        let bands = self.ctx.catalog().all_bands()?;
        self.notifier.on_band_list(bands);
        Ok(())
    }

    fn request_album_list(&mut self) -> Result<()> {
        let current = self
            .session
            .as_ref()
            .and_then(|session| session.player.current_song());
        let Some(current) = current else {
            debug!("No current song, ignoring album list request");
            return Ok(());
        };

        let albums = self.ctx.catalog().albums_for_band(current.band.id)?;
        self.notifier.on_album_list(albums);
        Ok(())
    }

    fn request_year_list(&mut self) -> Result<()> {
        let years = self.ctx.catalog().all_years()?;
        self.notifier.on_year_list(years);
        Ok(())
    }

    fn force_pause(&mut self) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return unavailable("force_pause");
        };
        session.player.pause()?;
        session.playing = false;
        session.emit_status(self.notifier.as_ref());
        Ok(())
    }

    fn song_advanced(&mut self) -> Result<()> {
        if let Some(session) = self.session.as_ref() {
            session.emit_status(self.notifier.as_ref());
        }
        Ok(())
    }

    fn queue_emptied(&mut self) -> Result<()> {
        let ctx = self.ctx.clone();
        let Some(session) = self.session.as_mut() else {
            return unavailable("queue_emptied");
        };

        // A request handled since the event was raised may have refilled the queue
        let upcoming = session.player.upcoming_len();
        if upcoming > 0 {
            debug!(upcoming, "Queue already refilled, ignoring queue-empty event");
            return Ok(());
        }
        if session.replenish(&ctx, false)? {
            session.emit_status(self.notifier.as_ref());
        }
        Ok(())
    }
}

fn unavailable(operation: &'static str) -> Result<()> {
    warn!(operation, "Controller unavailable, ignoring request");
    Ok(())
}

impl Actor for MusicController {
    type Api = ControllerHandle;
    type Error = BackendError;

    fn setup(&mut self, registry: &mut Registry<Self>, mailbox: Mailbox) -> ControllerHandle {
        let callbacks = Callbacks {
            toggle_play_pause: registry.register_unit(Self::toggle_play_pause),
            next_song: registry.register_unit(Self::next_song),
            restart_current_song: registry.register_unit(Self::restart_current_song),
            skip_forward: registry.register_unit(|c: &mut Self| c.skip(true)),
            skip_backward: registry.register_unit(|c: &mut Self| c.skip(false)),
            toggle_band_mode: registry.register_unit(|c: &mut Self| c.toggle_mode(PlayMode::Band)),
            toggle_album_mode: registry
                .register_unit(|c: &mut Self| c.toggle_mode(PlayMode::Album)),
            toggle_year_mode: registry.register_unit(|c: &mut Self| c.toggle_mode(PlayMode::Year)),
            lock_specific_band: registry.register(Self::lock_specific_band),
            lock_specific_album: registry.register(Self::lock_specific_album),
            lock_specific_year: registry.register(Self::lock_specific_year),
            change_sub_mode: registry.register_unit(Self::change_sub_mode),
            request_band_list: registry.register_unit(Self::request_band_list),
            request_album_list: registry.register_unit(Self::request_album_list),
            request_year_list: registry.register_unit(Self::request_year_list),
            force_pause: registry.register_unit(Self::force_pause),
        };

        // Player events come back through the same queue as UI requests
        let song_advanced = registry.register_unit(Self::song_advanced);
        let queue_emptied = registry.register_unit(Self::queue_emptied);
        self.events = Some(PlayerEvents::controller(
            mailbox.clone(),
            song_advanced,
            queue_emptied,
        ));

        ControllerHandle { mailbox, callbacks }
    }

    fn before_main_loop(&mut self) {
        if let Err(e) = self.start() {
            error!(error = %e, "Controller failed to start");
            self.notifier.on_exception_report(e);
        }
    }

    fn on_handler_error(&mut self, callback_id: CallbackId, error: BackendError) {
        error!(callback_id, %error, "Controller request failed");
        self.notifier.on_exception_report(error);
    }
}

/// Start the controller on its own thread
///
/// Returns once the controller has registered its handlers. The library check and
/// first batch happen on the controller thread right after; an empty library is
/// reported through `notifier` as `BackendError::NoLibrary`.
pub fn spawn_controller(
    catalog: Arc<dyn Catalog>,
    notifier: Box<dyn UiNotifier>,
    player_factory: PlayerFactory,
    config: &BackendConfig,
) -> Result<ActorHandle<ControllerHandle>> {
    let ctx = SelectionContext::new(catalog, config.selection);
    let startup_sub_mode = config.startup_sub_mode;

    let handle = stereo_actor::spawn(&config.thread_name, move || {
        MusicController::new(ctx, notifier, player_factory, startup_sub_mode)
    })?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifier::{ChannelNotifier, UiEvent};
    use crate::player::PlayerEvent;
    use crate::queue::QueuePlayer;
    use crossbeam_channel::Receiver;
    use std::sync::Mutex;
    use stereo_core::{Album, Band, MemoryCatalog, Song};
    use stereo_selection::{ProviderKind, SelectionConfig, SubModeLabel};

    /// Records every call, then delegates to a `QueuePlayer`
    struct RecordingPlayer {
        inner: QueuePlayer,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MusicPlayer for RecordingPlayer {
        fn set_playlist(&mut self, songs: Vec<SongInfo>, replace_current: bool) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("set_playlist({}, {replace_current})", songs.len()));
            self.inner.set_playlist(songs, replace_current)
        }

        fn prepare_next_song(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("prepare_next_song".into());
            self.inner.prepare_next_song()
        }

        fn play(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("play".into());
            self.inner.play()
        }

        fn pause(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("pause".into());
            self.inner.pause()
        }

        fn restart_current(&mut self) -> Result<()> {
            self.calls.lock().unwrap().push("restart_current".into());
            self.inner.restart_current()
        }

        fn current_song(&self) -> Option<SongInfo> {
            self.inner.current_song()
        }

        fn upcoming_len(&self) -> usize {
            self.inner.upcoming_len()
        }
    }

    struct Harness {
        controller: MusicController,
        ui: Receiver<UiEvent>,
        player_events: Receiver<PlayerEvent>,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Harness {
        fn new(catalog: MemoryCatalog) -> Self {
            let (notifier, ui) = ChannelNotifier::new();
            let (events, player_events) = PlayerEvents::channel();
            let calls = Arc::new(Mutex::new(Vec::new()));
            let factory_calls = Arc::clone(&calls);
            let factory: PlayerFactory = Box::new(move |events| {
                Ok(Box::new(RecordingPlayer {
                    inner: QueuePlayer::new(events),
                    calls: factory_calls,
                }) as Box<dyn MusicPlayer>)
            });

            let ctx = SelectionContext::new(Arc::new(catalog), SelectionConfig::default());
            let mut controller =
                MusicController::new(ctx, Box::new(notifier), factory, CollectionSubMode::FullShuffle);
            controller.events = Some(events);
            controller.start().unwrap();

            let harness = Self {
                controller,
                ui,
                player_events,
                calls,
            };
            harness.drain();
            harness
        }

        fn drain(&self) {
            self.ui.try_iter().for_each(drop);
            self.player_events.try_iter().for_each(drop);
            self.calls.lock().unwrap().clear();
        }

        fn statuses(&self) -> Vec<BackendStatus> {
            self.ui
                .try_iter()
                .filter_map(|event| match event {
                    UiEvent::Status(status) => Some(status),
                    _ => None,
                })
                .collect()
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn session(&self) -> &Session {
            self.controller.session.as_ref().unwrap()
        }

        fn current(&self) -> SongInfo {
            self.session().player.current_song().unwrap()
        }

        /// Advance until nothing is queued after the current song
        fn play_out_queue(&mut self) {
            while self.session().player.upcoming_len() > 0 {
                self.controller.next_song().unwrap();
            }
            self.drain();
        }
    }

    /// Band A: two loose songs. Band B: album X, three songs 1999-2001.
    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_band(Band::new(1, "Band A"));
        catalog.add_band(Band::new(2, "Band B"));
        catalog.add_album(Album::new(10, "Album X", 2, Some(1999))).unwrap();
        for song in [
            Song::new(1, "a-one", "/a/1.mp3", 1, None, None),
            Song::new(2, "a-two", "/a/2.mp3", 1, None, None),
            Song::new(11, "x-1", "/b/x/01.mp3", 2, Some(10), Some(1999)),
            Song::new(12, "x-2", "/b/x/02.mp3", 2, Some(10), Some(2000)),
            Song::new(13, "x-3", "/b/x/03.mp3", 2, Some(10), Some(2001)),
        ] {
            catalog.add_song(song).unwrap();
        }
        catalog
    }

    #[test]
    fn startup_replaces_current_with_shuffle_batch() {
        let harness = Harness::new(catalog());
        let session = harness.session();

        assert_eq!(session.selector.mode(), PlayMode::Shuffle);
        assert!(!session.playing);
        assert!(session.player.current_song().is_some());
    }

    #[test]
    fn empty_library_reports_once_and_ignores_requests() {
        let (notifier, ui) = ChannelNotifier::new();
        let factory: PlayerFactory = Box::new(|events| {
            Ok(Box::new(QueuePlayer::new(events)) as Box<dyn MusicPlayer>)
        });
        let ctx = SelectionContext::new(Arc::new(MemoryCatalog::new()), SelectionConfig::default());
        let mut controller =
            MusicController::new(ctx, Box::new(notifier), factory, CollectionSubMode::FullShuffle);
        controller.events = Some(PlayerEvents::channel().0);

        controller.start().unwrap();
        controller.toggle_play_pause().unwrap();
        controller.toggle_mode(PlayMode::Band).unwrap();

        let events: Vec<UiEvent> = ui.try_iter().collect();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], UiEvent::Exception(BackendError::NoLibrary)));
        assert!(controller.session.is_none());
    }

    #[test]
    fn toggle_play_pause_flips_and_reports() {
        let mut harness = Harness::new(catalog());

        harness.controller.toggle_play_pause().unwrap();
        harness.controller.toggle_play_pause().unwrap();

        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].is_playing);
        assert!(!statuses[1].is_playing);
        assert_eq!(harness.calls(), vec!["play", "pause"]);
    }

    #[test]
    fn force_pause_always_pauses() {
        let mut harness = Harness::new(catalog());
        harness.controller.force_pause().unwrap();
        harness.controller.force_pause().unwrap();

        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 2);
        assert!(statuses.iter().all(|s| !s.is_playing));
    }

    #[test]
    fn band_toggle_keeps_current_song_and_reports_once() {
        let mut harness = Harness::new(catalog());
        let current = harness.current();

        harness.controller.toggle_mode(PlayMode::Band).unwrap();

        let calls = harness.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].ends_with(", false)"));
        assert_eq!(harness.current(), current);
        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].mode, PlayMode::Band);
    }

    #[test]
    fn band_toggle_twice_returns_to_shuffle() {
        let mut harness = Harness::new(catalog());

        harness.controller.toggle_mode(PlayMode::Band).unwrap();
        harness.controller.toggle_mode(PlayMode::Band).unwrap();

        let session = harness.session();
        assert_eq!(session.selector.mode(), PlayMode::Shuffle);
        assert_eq!(session.selector.provider_kind(), ProviderKind::Shuffle);
        let modes: Vec<PlayMode> = harness.statuses().iter().map(|s| s.mode).collect();
        assert_eq!(modes, vec![PlayMode::Band, PlayMode::Shuffle]);
    }

    #[test]
    fn lock_band_replaces_current_only_for_other_band() {
        let mut harness = Harness::new(catalog());
        let current_band = harness.current().band.id;
        let other_band = if current_band == 1 { 2 } else { 1 };

        harness.controller.lock_specific_band(current_band).unwrap();
        assert!(harness.calls()[0].ends_with("false)"));
        harness.drain();

        harness.controller.lock_specific_band(other_band).unwrap();
        assert!(harness.calls()[0].ends_with("true)"));
        assert_eq!(harness.current().band.id, other_band);
        assert_eq!(harness.statuses().len(), 1);
    }

    #[test]
    fn lock_year_without_songs_falls_back_to_shuffle() {
        let mut harness = Harness::new(catalog());

        harness.controller.lock_specific_year(1970).unwrap();

        let session = harness.session();
        assert_eq!(session.selector.mode(), PlayMode::Shuffle);
        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].mode, PlayMode::Shuffle);
    }

    #[test]
    fn lock_album_plays_from_track_one() {
        let mut harness = Harness::new(catalog());

        harness.controller.lock_specific_album(10).unwrap();

        assert_eq!(harness.current().song.id, 11);
        assert_eq!(harness.calls(), vec!["set_playlist(3, true)"]);
        assert_eq!(harness.statuses()[0].mode, PlayMode::Album);
    }

    #[test]
    fn album_toggle_without_album_is_silent() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_band(1).unwrap();
        harness.drain();

        harness.controller.toggle_mode(PlayMode::Album).unwrap();
        harness.controller.toggle_mode(PlayMode::Year).unwrap();

        assert!(harness.calls().is_empty());
        assert!(harness.statuses().is_empty());
        assert_eq!(harness.session().selector.mode(), PlayMode::Band);
    }

    #[test]
    fn change_sub_mode_reports_new_label() {
        let mut harness = Harness::new(catalog());

        harness.controller.change_sub_mode().unwrap();

        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].sub_mode, SubModeLabel::DoubleShot);
        assert_eq!(harness.calls(), vec!["set_playlist(1, false)"]);
    }

    #[test]
    fn change_sub_mode_in_album_mode_does_nothing() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_album(10).unwrap();
        harness.drain();

        harness.controller.change_sub_mode().unwrap();

        assert!(harness.calls().is_empty());
        assert!(harness.statuses().is_empty());
    }

    #[test]
    fn exhausted_album_falls_back_on_queue_empty() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_album(10).unwrap();
        harness.play_out_queue();
        assert_eq!(harness.current().song.id, 13);

        harness.controller.queue_emptied().unwrap();

        assert_eq!(harness.session().selector.mode(), PlayMode::Shuffle);
        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].mode, PlayMode::Shuffle);
    }

    #[test]
    fn queue_empty_in_shuffle_refills_quietly() {
        let mut harness = Harness::new(catalog());
        harness.play_out_queue();

        harness.controller.queue_emptied().unwrap();

        assert_eq!(harness.calls(), vec!["set_playlist(5, false)"]);
        assert!(harness.statuses().is_empty());
    }

    #[test]
    fn late_queue_empty_keeps_sequential_playlist() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_album(10).unwrap();
        harness.controller.toggle_mode(PlayMode::Band).unwrap();
        harness.play_out_queue();

        // The player reported the empty queue, but a sub-mode change got in first
        harness.controller.change_sub_mode().unwrap();
        let queued = harness.session().player.upcoming_len();
        assert_eq!(queued, 2);
        harness.drain();

        harness.controller.queue_emptied().unwrap();

        let session = harness.session();
        assert_eq!(session.selector.mode(), PlayMode::Band);
        assert_eq!(session.selector.sub_mode(), SubModeLabel::Sequential);
        assert_eq!(session.player.upcoming_len(), queued);
        assert!(harness.calls().is_empty());
        assert!(harness.statuses().is_empty());
    }

    #[test]
    fn late_queue_empty_keeps_album_lock() {
        let mut harness = Harness::new(catalog());
        harness.play_out_queue();

        harness.controller.lock_specific_album(10).unwrap();
        harness.drain();
        harness.controller.queue_emptied().unwrap();

        let session = harness.session();
        assert_eq!(session.selector.mode(), PlayMode::Album);
        assert_eq!(session.player.upcoming_len(), 2);
        assert!(harness.statuses().is_empty());
    }

    #[test]
    fn skip_backward_in_album_mode_restarts_album() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_album(10).unwrap();
        harness.controller.next_song().unwrap();
        assert_eq!(harness.current().song.id, 12);
        harness.drain();

        harness.controller.skip(false).unwrap();

        assert_eq!(harness.current().song.id, 11);
        assert_eq!(harness.calls(), vec!["set_playlist(3, true)"]);
    }

    #[test]
    fn skip_in_shuffle_is_noop() {
        let mut harness = Harness::new(catalog());

        harness.controller.skip(true).unwrap();
        harness.controller.skip(false).unwrap();

        assert!(harness.calls().is_empty());
    }

    #[test]
    fn album_list_is_scoped_to_current_band() {
        let mut harness = Harness::new(catalog());
        harness.controller.lock_specific_band(2).unwrap();
        harness.drain();

        harness.controller.request_album_list().unwrap();

        match harness.ui.try_recv().unwrap() {
            UiEvent::AlbumList(albums) => {
                assert_eq!(albums.len(), 1);
                assert_eq!(albums[0].id, 10);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn year_and_band_lists() {
        let mut harness = Harness::new(catalog());

        harness.controller.request_year_list().unwrap();
        harness.controller.request_band_list().unwrap();

        assert!(matches!(harness.ui.try_recv().unwrap(), UiEvent::YearList(years) if years == vec![1999, 2000, 2001]));
        assert!(matches!(harness.ui.try_recv().unwrap(), UiEvent::BandList(bands) if bands.len() == 2));
    }

    #[test]
    fn song_advanced_reports_status() {
        let mut harness = Harness::new(catalog());
        harness.controller.next_song().unwrap();
        assert_eq!(harness.player_events.try_recv().unwrap(), PlayerEvent::SongAdvanced);

        harness.controller.song_advanced().unwrap();

        let statuses = harness.statuses();
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].current_song, Some(harness.current()));
    }
}
