//! Stereo Actor
//!
//! Lets any thread call into an object that must only ever run on one owner thread,
//! without locks. Every call becomes a message on an unbounded queue that the owner
//! thread drains in order, one handler at a time.
//!
//! # Lifecycle
//!
//! 1. `spawn` starts a named owner thread and blocks the caller.
//! 2. On the owner thread the actor is built, registers its handlers in a
//!    [`Registry`] and returns its public API.
//! 3. The caller is released with an [`ActorHandle`] holding that API.
//! 4. `Actor::before_main_loop` runs, then the loop processes messages until the
//!    handle is abandoned.
//!
//! A handler that fails or panics is logged and the loop moves on to the next
//! message.
//!
//! # Example
//!
//! ```rust
//! use std::convert::Infallible;
//! use stereo_actor::{spawn, Actor, CallbackId, Mailbox, Registry};
//!
//! struct Counter {
//!     total: u64,
//! }
//!
//! #[derive(Clone)]
//! struct CounterApi {
//!     mailbox: Mailbox,
//!     add: CallbackId,
//! }
//!
//! impl CounterApi {
//!     fn add(&self, n: u64) {
//!         self.mailbox.send(self.add, n);
//!     }
//! }
//!
//! impl Actor for Counter {
//!     type Api = CounterApi;
//!     type Error = Infallible;
//!
//!     fn setup(&mut self, registry: &mut Registry<Self>, mailbox: Mailbox) -> CounterApi {
//!         let add = registry.register(|counter: &mut Counter, n: u64| {
//!             counter.total += n;
//!             Ok(())
//!         });
//!         CounterApi { mailbox, add }
//!     }
//! }
//!
//! let handle = spawn("counter", || Counter { total: 0 }).unwrap();
//! handle.api().add(2);
//! handle.api().add(3);
//! handle.abandon();
//! handle.join().unwrap();
//! ```

#![forbid(unsafe_code)]

mod actor;
pub mod error;
mod mailbox;
mod registry;
mod runtime;

pub use actor::{Actor, CallbackId};
pub use error::{ActorError, Result};
pub use mailbox::Mailbox;
pub use registry::Registry;
pub use runtime::{spawn, ActorHandle};
