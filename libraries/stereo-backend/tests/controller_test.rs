//! Integration tests for the controller actor
//!
//! Each test spawns a real controller thread with a `QueuePlayer` and watches the
//! notifications it sends back.

use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use stereo_actor::ActorHandle;
use stereo_backend::{
    spawn_controller, BackendConfig, BackendError, BackendStatus, ChannelNotifier,
    ControllerHandle, QueuePlayer, UiEvent, UiNotifier,
};
use stereo_core::{Album, Band, MemoryCatalog, Song, Year};
use stereo_selection::{CollectionSubMode, PlayMode, SubModeLabel};

const TIMEOUT: Duration = Duration::from_secs(5);

// ===== Test Helpers =====

/// Band A: two loose songs. Band B: album 10 with songs from 1999 and 2001.
fn catalog() -> MemoryCatalog {
    let mut catalog = MemoryCatalog::new();
    catalog.add_band(Band::new(1, "Band A"));
    catalog.add_band(Band::new(2, "Band B"));
    catalog.add_album(Album::new(10, "Album X", 2, Some(1999))).unwrap();
    for song in [
        Song::new(1, "a-one", "/a/1.mp3", 1, None, None),
        Song::new(2, "a-two", "/a/2.mp3", 1, None, None),
        Song::new(11, "x-1", "/b/x/01.mp3", 2, Some(10), Some(1999)),
        Song::new(12, "x-2", "/b/x/02.mp3", 2, Some(10), Some(2001)),
        Song::new(13, "x-3", "/b/x/03.mp3", 2, Some(10), Some(2001)),
    ] {
        catalog.add_song(song).unwrap();
    }
    catalog
}

struct Running {
    handle: ActorHandle<ControllerHandle>,
    events: Receiver<UiEvent>,
}

/// Holds the controller thread inside one status report until released
struct GatedNotifier {
    inner: ChannelNotifier,
    armed: Arc<AtomicBool>,
    gate: Receiver<()>,
}

impl UiNotifier for GatedNotifier {
    fn on_backend_status_change(&self, status: BackendStatus) {
        if self.armed.swap(false, Ordering::SeqCst) {
            let _ = self.gate.recv_timeout(TIMEOUT);
        }
        self.inner.on_backend_status_change(status);
    }

    fn on_band_list(&self, bands: Vec<Band>) {
        self.inner.on_band_list(bands);
    }

    fn on_album_list(&self, albums: Vec<Album>) {
        self.inner.on_album_list(albums);
    }

    fn on_year_list(&self, years: Vec<Year>) {
        self.inner.on_year_list(years);
    }

    fn on_exception_report(&self, error: BackendError) {
        self.inner.on_exception_report(error);
    }
}

struct Gate {
    armed: Arc<AtomicBool>,
    release: Sender<()>,
}

impl Running {
    fn start(catalog: MemoryCatalog, config: BackendConfig, verify_files: bool) -> Self {
        let (notifier, events) = ChannelNotifier::new();
        Self::with_notifier(catalog, Box::new(notifier), events, &config, verify_files)
    }

    fn with_notifier(
        catalog: MemoryCatalog,
        notifier: Box<dyn UiNotifier>,
        events: Receiver<UiEvent>,
        config: &BackendConfig,
        verify_files: bool,
    ) -> Self {
        let handle = spawn_controller(
            Arc::new(catalog),
            notifier,
            QueuePlayer::factory(verify_files),
            config,
        )
        .unwrap();
        Self { handle, events }
    }

    /// Start with a notifier that can stall the controller on a status report
    fn gated() -> (Self, Gate) {
        let (inner, events) = ChannelNotifier::new();
        let (release, gate) = unbounded();
        let armed = Arc::new(AtomicBool::new(false));
        let notifier = GatedNotifier {
            inner,
            armed: Arc::clone(&armed),
            gate,
        };
        let running = Self::with_notifier(
            catalog(),
            Box::new(notifier),
            events,
            &BackendConfig::default(),
            false,
        );
        running.next_status();
        (running, Gate { armed, release })
    }

    /// Wait until every request sent so far has been handled, returning the
    /// statuses reported meanwhile
    fn settle(&self) -> Vec<BackendStatus> {
        self.api().request_year_list();
        let mut statuses = Vec::new();
        loop {
            match self.next_event() {
                UiEvent::Status(status) => statuses.push(status),
                UiEvent::YearList(_) => return statuses,
                UiEvent::Exception(e) => panic!("unexpected error report: {e}"),
                _ => {}
            }
        }
    }

    /// Start and wait until the first song is loaded
    fn started() -> (Self, BackendStatus) {
        let running = Self::start(catalog(), BackendConfig::default(), false);
        let status = running.next_status();
        (running, status)
    }

    fn api(&self) -> &ControllerHandle {
        self.handle.api()
    }

    fn next_event(&self) -> UiEvent {
        self.events
            .recv_timeout(TIMEOUT)
            .expect("controller sent nothing")
    }

    fn next_status(&self) -> BackendStatus {
        loop {
            match self.next_event() {
                UiEvent::Status(status) => return status,
                UiEvent::Exception(e) => panic!("unexpected error report: {e}"),
                _ => {}
            }
        }
    }

    fn stop(self) {
        self.handle.abandon();
        self.handle.join().unwrap();
    }
}

// ===== Startup =====

#[test]
fn startup_loads_a_song_paused_in_shuffle() {
    let (running, status) = Running::started();

    assert_eq!(status.mode, PlayMode::Shuffle);
    assert_eq!(status.sub_mode, SubModeLabel::None);
    assert!(!status.is_playing);
    assert!(status.current_song.is_some());

    running.stop();
}

#[test]
fn startup_sub_mode_from_config() {
    let config = BackendConfig {
        startup_sub_mode: CollectionSubMode::BlockParty,
        ..BackendConfig::default()
    };
    let running = Running::start(catalog(), config, false);

    let status = running.next_status();
    assert_eq!(status.sub_mode, SubModeLabel::BlockParty);

    running.stop();
}

#[test]
fn empty_library_is_reported_exactly_once() {
    let running = Running::start(MemoryCatalog::new(), BackendConfig::default(), false);

    running.api().toggle_play_pause();
    running.api().toggle_band_mode();
    running.api().next_song();
    running.api().request_band_list();

    let mut exceptions = 0;
    loop {
        match running.next_event() {
            UiEvent::Exception(BackendError::NoLibrary) => exceptions += 1,
            UiEvent::BandList(bands) => {
                assert!(bands.is_empty());
                break;
            }
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(exceptions, 1);

    running.stop();
}

#[test]
fn unreadable_song_is_reported() {
    let running = Running::start(catalog(), BackendConfig::default(), true);

    match running.next_event() {
        UiEvent::Exception(BackendError::Player(msg)) => {
            assert!(msg.contains(".mp3"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    running.stop();
}

// ===== Mode Changes =====

#[test]
fn year_without_songs_falls_back_to_shuffle() {
    let (running, _) = Running::started();

    running.api().lock_specific_year(2000);

    let status = running.next_status();
    assert_eq!(status.mode, PlayMode::Shuffle);
    assert_eq!(status.sub_mode, SubModeLabel::None);

    running.stop();
}

#[test]
fn year_lock_plays_that_year() {
    let (running, _) = Running::started();

    running.api().lock_specific_year(2001);

    let status = running.next_status();
    assert_eq!(status.mode, PlayMode::Year);
    assert_eq!(status.current_song.unwrap().song.year, Some(2001));

    running.stop();
}

#[test]
fn band_toggle_twice_returns_to_shuffle() {
    let (running, startup) = Running::started();
    let band = startup.current_song.unwrap().band.id;

    running.api().toggle_band_mode();
    let locked = running.next_status();
    assert_eq!(locked.mode, PlayMode::Band);
    assert_eq!(locked.current_song.unwrap().band.id, band);

    running.api().toggle_band_mode();
    assert_eq!(running.next_status().mode, PlayMode::Shuffle);

    running.stop();
}

#[test]
fn queue_empty_reported_after_sub_mode_change_keeps_sequential() {
    let (running, gate) = Running::gated();

    // Band B in shuffle with one song left after the current one
    running.api().lock_specific_album(10);
    running.api().toggle_band_mode();
    running.api().next_song();
    running.api().next_song();
    running.settle();

    // Stall the controller so both requests queue up before the player's events
    gate.armed.store(true, Ordering::SeqCst);
    running.api().toggle_play_pause();
    running.api().next_song();
    running.api().change_sub_mode();
    gate.release.send(()).unwrap();

    let statuses = running.settle();
    let last = statuses.last().unwrap();
    assert_eq!(last.mode, PlayMode::Band);
    assert_eq!(last.sub_mode, SubModeLabel::Sequential);
    assert!(statuses.iter().all(|s| s.mode == PlayMode::Band));

    running.stop();
}

#[test]
fn album_lock_starts_at_track_one() {
    let (running, _) = Running::started();

    running.api().lock_specific_album(10);

    let status = running.next_status();
    assert_eq!(status.mode, PlayMode::Album);
    assert_eq!(status.current_song.unwrap().song.id, 11);

    running.stop();
}

#[test]
fn sub_mode_cycles_in_shuffle() {
    let (running, _) = Running::started();

    running.api().change_sub_mode();
    assert_eq!(running.next_status().sub_mode, SubModeLabel::DoubleShot);

    running.api().change_sub_mode();
    assert_eq!(running.next_status().sub_mode, SubModeLabel::BlockParty);

    running.api().change_sub_mode();
    assert_eq!(running.next_status().sub_mode, SubModeLabel::None);

    running.stop();
}

// ===== Playback =====

#[test]
fn play_pause_and_force_pause() {
    let (running, _) = Running::started();

    running.api().toggle_play_pause();
    assert!(running.next_status().is_playing);

    running.api().force_pause();
    assert!(!running.next_status().is_playing);

    running.api().force_pause();
    assert!(!running.next_status().is_playing);

    running.stop();
}

#[test]
fn next_song_reports_new_current_song() {
    let (running, startup) = Running::started();

    running.api().next_song();

    let status = running.next_status();
    assert_ne!(status.current_song, startup.current_song);

    running.stop();
}

// ===== Lists =====

#[test]
fn lists_are_sorted() {
    let (running, _) = Running::started();

    running.api().request_band_list();
    running.api().request_year_list();

    match running.next_event() {
        UiEvent::BandList(bands) => {
            let names: Vec<&str> = bands.iter().map(|b| b.name.as_str()).collect();
            assert_eq!(names, vec!["Band A", "Band B"]);
        }
        other => panic!("unexpected event {other:?}"),
    }
    match running.next_event() {
        UiEvent::YearList(years) => assert_eq!(years, vec![1999, 2001]),
        other => panic!("unexpected event {other:?}"),
    }

    running.stop();
}

#[test]
fn album_list_follows_current_band() {
    let (running, _) = Running::started();

    running.api().lock_specific_band(2);
    running.next_status();
    running.api().request_album_list();

    let albums = loop {
        if let UiEvent::AlbumList(albums) = running.next_event() {
            break albums;
        }
    };
    assert_eq!(albums.len(), 1);
    assert_eq!(albums[0].name, "Album X");

    running.stop();
}

#[test]
fn handle_works_from_other_threads() {
    let (running, _) = Running::started();

    let api = running.api().clone();
    std::thread::spawn(move || api.toggle_play_pause())
        .join()
        .unwrap();

    assert!(running.next_status().is_playing);

    running.stop();
}
