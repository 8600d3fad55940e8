//! The `Actor` trait

use crate::registry::Registry;
use crate::Mailbox;
use std::fmt::Display;

/// Stable handle to a registered handler
pub type CallbackId = usize;

/// An object whose methods only ever run on its own owner thread
///
/// The actor value is constructed on the owner thread, so it does not need to be
/// `Send`. Only its public API crosses threads.
pub trait Actor: Sized + 'static {
    /// Value handed back to the spawning thread once setup completes.
    /// Usually a cloneable struct holding the mailbox and callback ids.
    type Api: Send + 'static;

    /// Error a handler may return
    type Error: Display;

    /// Register handlers and build the public API
    ///
    /// Runs on the owner thread before any message is processed.
    fn setup(&mut self, registry: &mut Registry<Self>, mailbox: Mailbox) -> Self::Api;

    /// Runs once on the owner thread after the spawner has been released and before
    /// the first message. Messages sent meanwhile stay queued.
    fn before_main_loop(&mut self) {}

    /// Called with the error of a failed handler; the loop then carries on
    fn on_handler_error(&mut self, callback_id: CallbackId, error: Self::Error) {
        tracing::error!(callback_id, %error, "Actor handler failed");
    }
}
