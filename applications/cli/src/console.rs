//! Console UI
//!
//! Runs as its own actor so the controller never blocks on terminal output. The
//! controller talks to it through `ConsoleNotifier`, which only queues messages.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use stereo_actor::{Actor, CallbackId, Mailbox, Registry};
use stereo_backend::{BackendError, BackendStatus, UiNotifier};
use stereo_core::{Album, Band, Year};

/// Prints everything the controller reports
pub struct ConsoleUi {
    out: Box<dyn Write + Send>,
    controls_enabled: Arc<AtomicBool>,
}

impl ConsoleUi {
    /// `controls_enabled` is cleared on the first error report
    pub fn new(out: Box<dyn Write + Send>, controls_enabled: Arc<AtomicBool>) -> Self {
        Self {
            out,
            controls_enabled,
        }
    }

    fn status(&mut self, status: BackendStatus) -> io::Result<()> {
        writeln!(self.out, "{status}")?;
        self.out.flush()
    }

    fn bands(&mut self, bands: Vec<Band>) -> io::Result<()> {
        writeln!(self.out, "Bands:")?;
        for band in bands {
            writeln!(self.out, "  {:>6}  {}", band.id, band.name)?;
        }
        self.out.flush()
    }

    fn albums(&mut self, albums: Vec<Album>) -> io::Result<()> {
        writeln!(self.out, "Albums:")?;
        for album in albums {
            match album.year {
                Some(year) => writeln!(self.out, "  {:>6}  {} ({year})", album.id, album.name)?,
                None => writeln!(self.out, "  {:>6}  {}", album.id, album.name)?,
            }
        }
        self.out.flush()
    }

    fn years(&mut self, years: Vec<Year>) -> io::Result<()> {
        let years: Vec<String> = years.iter().map(ToString::to_string).collect();
        writeln!(self.out, "Years: {}", years.join(" "))?;
        self.out.flush()
    }

    fn exception(&mut self, error: BackendError) -> io::Result<()> {
        self.controls_enabled.store(false, Ordering::SeqCst);
        writeln!(self.out, "Error: {error}")?;
        writeln!(self.out, "Controls disabled. Type 'quit' to exit.")?;
        self.out.flush()
    }
}

impl Actor for ConsoleUi {
    type Api = ConsoleNotifier;
    type Error = io::Error;

    fn setup(&mut self, registry: &mut Registry<Self>, mailbox: Mailbox) -> ConsoleNotifier {
        ConsoleNotifier {
            status: registry.register(Self::status),
            bands: registry.register(Self::bands),
            albums: registry.register(Self::albums),
            years: registry.register(Self::years),
            exception: registry.register(Self::exception),
            mailbox,
        }
    }
}

/// `UiNotifier` that forwards to the console actor
#[derive(Debug, Clone)]
pub struct ConsoleNotifier {
    mailbox: Mailbox,
    status: CallbackId,
    bands: CallbackId,
    albums: CallbackId,
    years: CallbackId,
    exception: CallbackId,
}

impl UiNotifier for ConsoleNotifier {
    fn on_backend_status_change(&self, status: BackendStatus) {
        self.mailbox.send(self.status, status);
    }

    fn on_band_list(&self, bands: Vec<Band>) {
        self.mailbox.send(self.bands, bands);
    }

    fn on_album_list(&self, albums: Vec<Album>) {
        self.mailbox.send(self.albums, albums);
    }

    fn on_year_list(&self, years: Vec<Year>) {
        self.mailbox.send(self.years, years);
    }

    fn on_exception_report(&self, error: BackendError) {
        self.mailbox.send(self.exception, error);
    }
}
