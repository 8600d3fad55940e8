//! UI notifications
//!
//! The controller reports everything the UI needs through a `UiNotifier`. The
//! notifier is moved onto the controller thread, so it must be `Send`; a real UI
//! forwards each call onto its own thread.

use crate::error::BackendError;
use crate::status::BackendStatus;
use crossbeam_channel::{unbounded, Receiver, Sender};
use stereo_core::{Album, Band, Year};

/// Receiver of backend notifications
pub trait UiNotifier: Send {
    fn on_backend_status_change(&self, status: BackendStatus);

    fn on_band_list(&self, bands: Vec<Band>);

    fn on_album_list(&self, albums: Vec<Album>);

    fn on_year_list(&self, years: Vec<Year>);

    /// Any reported error disables further control in the UI
    fn on_exception_report(&self, error: BackendError);
}

/// A notification, as delivered by `ChannelNotifier`
#[derive(Debug)]
pub enum UiEvent {
    Status(BackendStatus),
    BandList(Vec<Band>),
    AlbumList(Vec<Album>),
    YearList(Vec<Year>),
    Exception(BackendError),
}

/// Forwards every notification over a channel
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: Sender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, Receiver<UiEvent>) {
        let (sender, receiver) = unbounded();
        (Self { sender }, receiver)
    }

    fn forward(&self, event: UiEvent) {
        if let Err(e) = self.sender.send(event) {
            tracing::debug!(event = ?e.into_inner(), "UI receiver dropped, discarding notification");
        }
    }
}

impl UiNotifier for ChannelNotifier {
    fn on_backend_status_change(&self, status: BackendStatus) {
        self.forward(UiEvent::Status(status));
    }

    fn on_band_list(&self, bands: Vec<Band>) {
        self.forward(UiEvent::BandList(bands));
    }

    fn on_album_list(&self, albums: Vec<Album>) {
        self.forward(UiEvent::AlbumList(albums));
    }

    fn on_year_list(&self, years: Vec<Year>) {
        self.forward(UiEvent::YearList(years));
    }

    fn on_exception_report(&self, error: BackendError) {
        self.forward(UiEvent::Exception(error));
    }
}
