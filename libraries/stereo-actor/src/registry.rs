//! Callback registry
//!
//! Maps dense integer ids to typed handlers. Built once on the owner thread during
//! `Actor::setup`, then only read by the run loop.

use crate::error::ActorError;
use crate::mailbox::{Message, Payload};
use crate::{Actor, CallbackId};
use std::any::{type_name, Any};

/// Outcome of a handler that accepted its payload
pub(crate) type HandlerResult<A> = std::result::Result<(), <A as Actor>::Error>;

/// Type-erased handler. Returns `None` when the payload has the wrong type.
type Handler<A> = Box<dyn FnMut(&mut A, Payload) -> Option<HandlerResult<A>>>;

struct Entry<A: Actor> {
    payload_type: &'static str,
    handler: Handler<A>,
}

/// Handlers registered by an actor
pub struct Registry<A: Actor> {
    entries: Vec<Entry<A>>,
}

impl<A: Actor> Registry<A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a handler taking a payload of type `T`
    ///
    /// Ids are assigned in registration order starting at 0.
    pub fn register<T, F>(&mut self, mut handler: F) -> CallbackId
    where
        T: Any + Send,
        F: FnMut(&mut A, T) -> std::result::Result<(), A::Error> + 'static,
    {
        let callback_id = self.entries.len();
        self.entries.push(Entry {
            payload_type: type_name::<T>(),
            handler: Box::new(move |actor: &mut A, payload: Payload| {
                payload
                    .downcast::<T>()
                    .ok()
                    .map(|value| handler(actor, *value))
            }),
        });
        callback_id
    }

    /// Register a handler that takes no payload
    pub fn register_unit<F>(&mut self, mut handler: F) -> CallbackId
    where
        F: FnMut(&mut A) -> std::result::Result<(), A::Error> + 'static,
    {
        self.register(move |actor: &mut A, (): ()| handler(actor))
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run the handler a message is addressed to
    ///
    /// The outer error is a delivery failure; the inner one is the handler's own.
    pub(crate) fn dispatch(
        &mut self,
        actor: &mut A,
        message: Message,
    ) -> std::result::Result<HandlerResult<A>, ActorError> {
        let Message {
            callback_id,
            payload,
        } = message;
        let entry = self
            .entries
            .get_mut(callback_id)
            .ok_or(ActorError::UnknownCallback(callback_id))?;

        let expected = entry.payload_type;
        (entry.handler)(actor, payload).ok_or(ActorError::PayloadMismatch {
            callback_id,
            expected,
        })
    }
}
