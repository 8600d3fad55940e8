//! Inbound message queue
//!
//! Every call into an actor becomes a `Message` pushed onto an unbounded channel.
//! The owner thread is the only consumer.

use crate::CallbackId;
use crossbeam_channel::Sender;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque handler argument, downcast on the owner thread
pub(crate) type Payload = Box<dyn Any + Send>;

/// A queued call: which handler, and with what argument
pub(crate) struct Message {
    pub(crate) callback_id: CallbackId,
    pub(crate) payload: Payload,
}

/// What travels over the channel
pub(crate) enum Envelope {
    Call(Message),

    /// Wakes a blocked owner thread so it notices the stop flag
    Wake,
}

/// Sending side of an actor's queue
///
/// Cheap to clone and usable from any thread, including the owner thread itself.
/// Sending never blocks.
#[derive(Clone)]
pub struct Mailbox {
    sender: Sender<Envelope>,
    actor_name: Arc<str>,
}

impl Mailbox {
    pub(crate) fn new(sender: Sender<Envelope>, actor_name: &str) -> Self {
        Self {
            sender,
            actor_name: Arc::from(actor_name),
        }
    }

    /// Queue a call to `callback_id` with `payload`
    ///
    /// If the actor has already stopped, the message is dropped.
    pub fn send<T: Any + Send>(&self, callback_id: CallbackId, payload: T) {
        let message = Message {
            callback_id,
            payload: Box::new(payload),
        };
        if self.sender.send(Envelope::Call(message)).is_err() {
            tracing::debug!(
                actor = %self.actor_name,
                callback_id,
                "Actor has stopped, dropping message"
            );
        }
    }

    /// Queue a call to a handler registered without a payload
    pub fn send_unit(&self, callback_id: CallbackId) {
        self.send(callback_id, ());
    }

    /// Name of the actor this mailbox delivers to
    pub fn actor_name(&self) -> &str {
        &self.actor_name
    }

    /// Number of messages waiting to be handled
    pub fn pending(&self) -> usize {
        self.sender.len()
    }

    pub(crate) fn wake(&self) {
        // A closed channel means the loop is already gone
        let _ = self.sender.send(Envelope::Wake);
    }
}

impl fmt::Debug for Mailbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mailbox")
            .field("actor_name", &self.actor_name)
            .field("pending", &self.pending())
            .finish()
    }
}
