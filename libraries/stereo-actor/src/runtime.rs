//! Owner thread lifecycle
//!
//! `spawn` starts the owner thread, blocks until the actor has registered its
//! handlers, then hands the public API back. The owner thread runs the loop until
//! abandoned or until every mailbox is gone.

use crate::error::{ActorError, Result};
use crate::mailbox::Envelope;
use crate::registry::Registry;
use crate::{Actor, Mailbox};
use crossbeam_channel::{unbounded, Receiver};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info};

/// Startup state shared between the spawner and the owner thread
enum ReadyState<Api> {
    Pending,
    Ready(Api),
    Failed(String),
}

struct Handshake<Api> {
    state: Mutex<ReadyState<Api>>,
    changed: Condvar,
}

impl<Api> Handshake<Api> {
    fn new() -> Self {
        Self {
            state: Mutex::new(ReadyState::Pending),
            changed: Condvar::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ReadyState<Api>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: ReadyState<Api>) {
        *self.lock() = state;
        self.changed.notify_all();
    }

    /// Block until the owner thread publishes a result
    fn wait(&self) -> Result<Api> {
        let mut state = self.lock();
        loop {
            match std::mem::replace(&mut *state, ReadyState::Pending) {
                ReadyState::Pending => {
                    state = self
                        .changed
                        .wait(state)
                        .unwrap_or_else(PoisonError::into_inner);
                }
                ReadyState::Ready(api) => return Ok(api),
                ReadyState::Failed(reason) => return Err(ActorError::SetupAborted(reason)),
            }
        }
    }
}

/// Owning handle to a running actor
///
/// Exposes the actor's public API. Dropping the handle does not stop the actor;
/// call `abandon` for that.
pub struct ActorHandle<Api> {
    api: Api,
    mailbox: Mailbox,
    stop: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

impl<Api> ActorHandle<Api> {
    /// The API published by `Actor::setup`
    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Name of the owner thread
    pub fn name(&self) -> &str {
        self.mailbox.actor_name()
    }

    /// Stop after the current handler; queued messages are discarded
    pub fn abandon(&self) {
        debug!(actor = self.name(), "Abandoning actor");
        self.stop.store(true, Ordering::SeqCst);
        self.mailbox.wake();
    }

    /// Whether the owner thread has exited
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Wait for the owner thread to exit
    pub fn join(self) -> Result<()> {
        self.thread
            .join()
            .map_err(|payload| ActorError::Panicked(panic_message(payload.as_ref())))
    }
}

/// Start an actor on a new named thread
///
/// `init` builds the actor on the owner thread. Returns once `Actor::setup` has
/// completed there.
///
/// # Errors
/// `SpawnFailed` if the thread cannot be created, `SetupAborted` if `init` or
/// `setup` panics.
pub fn spawn<A, F>(name: &str, init: F) -> Result<ActorHandle<A::Api>>
where
    A: Actor,
    F: FnOnce() -> A + Send + 'static,
{
    let (sender, receiver) = unbounded();
    let mailbox = Mailbox::new(sender, name);
    let stop = Arc::new(AtomicBool::new(false));
    let handshake = Arc::new(Handshake::new());

    let thread = thread::Builder::new()
        .name(name.to_string())
        .spawn({
            let mailbox = mailbox.clone();
            let stop = Arc::clone(&stop);
            let handshake = Arc::clone(&handshake);
            move || run_owner_thread(init, mailbox, &receiver, &stop, &handshake)
        })
        .map_err(ActorError::SpawnFailed)?;

    match handshake.wait() {
        Ok(api) => {
            info!(actor = name, "Actor started");
            Ok(ActorHandle {
                api,
                mailbox,
                stop,
                thread,
            })
        }
        Err(e) => {
            // The owner thread has already returned
            let _ = thread.join();
            Err(e)
        }
    }
}

fn run_owner_thread<A, F>(
    init: F,
    mailbox: Mailbox,
    receiver: &Receiver<Envelope>,
    stop: &AtomicBool,
    handshake: &Handshake<A::Api>,
) where
    A: Actor,
    F: FnOnce() -> A,
{
    let name = mailbox.actor_name().to_string();

    let setup = panic::catch_unwind(AssertUnwindSafe(move || {
        let mut actor = init();
        let mut registry = Registry::new();
        let api = actor.setup(&mut registry, mailbox);
        (actor, registry, api)
    }));

    let (mut actor, mut registry) = match setup {
        Ok((actor, registry, api)) => {
            debug!(actor = %name, handlers = registry.len(), "Actor setup complete");
            handshake.publish(ReadyState::Ready(api));
            (actor, registry)
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            error!(actor = %name, %reason, "Actor setup panicked");
            handshake.publish(ReadyState::Failed(reason));
            return;
        }
    };

    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| actor.before_main_loop())) {
        error!(
            actor = %name,
            reason = %panic_message(payload.as_ref()),
            "before_main_loop panicked"
        );
    }

    run_loop(&name, &mut actor, &mut registry, receiver, stop);
}

fn run_loop<A: Actor>(
    name: &str,
    actor: &mut A,
    registry: &mut Registry<A>,
    receiver: &Receiver<Envelope>,
    stop: &AtomicBool,
) {
    while let Ok(envelope) = receiver.recv() {
        if stop.load(Ordering::SeqCst) {
            break;
        }
        let Envelope::Call(message) = envelope else {
            continue;
        };

        let callback_id = message.callback_id;
        match panic::catch_unwind(AssertUnwindSafe(|| registry.dispatch(actor, message))) {
            Ok(Ok(Ok(()))) => {}
            Ok(Ok(Err(e))) => actor.on_handler_error(callback_id, e),
            Ok(Err(e)) => error!(actor = name, error = %e, "Dropping undeliverable message"),
            Err(payload) => error!(
                actor = name,
                callback_id,
                reason = %panic_message(payload.as_ref()),
                "Actor handler panicked"
            ),
        }
    }

    if stop.load(Ordering::SeqCst) {
        let discarded = receiver
            .try_iter()
            .filter(|envelope| matches!(envelope, Envelope::Call(_)))
            .count();
        debug!(actor = name, discarded, "Actor stopped");
    } else {
        debug!(actor = name, "All mailboxes dropped, actor stopped");
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
