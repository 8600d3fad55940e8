/// Actor framework errors
use crate::CallbackId;
use thiserror::Error;

/// Result type alias using `ActorError`
pub type Result<T> = std::result::Result<T, ActorError>;

/// Errors raised by the actor runtime
#[derive(Error, Debug)]
pub enum ActorError {
    /// The owner thread could not be started
    #[error("Failed to spawn actor thread: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// The owner thread died before the public API was published
    #[error("Actor setup aborted: {0}")]
    SetupAborted(String),

    /// No handler was registered under this id
    #[error("Unknown callback id: {0}")]
    UnknownCallback(CallbackId),

    /// The payload does not have the type the handler was registered with
    #[error("Payload mismatch for callback {callback_id}: expected {expected}")]
    PayloadMismatch {
        callback_id: CallbackId,
        expected: &'static str,
    },

    /// The owner thread panicked outside of a handler
    #[error("Actor thread panicked: {0}")]
    Panicked(String),
}
