//! Cancel-and-replace scheduling of a single pending invocation.

use parking_lot::Mutex;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::action::{Action, FnAction};

/// Collapses bursts of [`invoke`](Self::invoke) calls into one action run.
///
/// Each `invoke` cancels whatever invocation is still waiting and schedules
/// a fresh one `quiet_period` from now. When the quiet period passes without
/// another call, the action runs once with the arguments of the last call.
///
/// Cloning yields another handle to the same debouncer: clones share the
/// pending invocation. Independently constructed debouncers share nothing.
///
/// Only *scheduled* work is ever cancelled. Once an action has started it
/// runs to completion, and a later firing may overlap it if the action
/// outlives the quiet period.
pub struct Debouncer<A: Send + 'static> {
    shared: Arc<Shared<A>>,
}

struct Shared<A: Send + 'static> {
    action: Arc<dyn Action<A>>,
    quiet_period: Duration,
    runtime: Handle,
    slot: Mutex<Slot<A>>,
}

/// Per-instance scheduling state. `generation` increases on every invoke so
/// a timer that woke up just as it was superseded can tell it lost.
struct Slot<A> {
    generation: u64,
    pending: Option<PendingInvocation<A>>,
}

struct PendingInvocation<A> {
    generation: u64,
    args: A,
    timer: JoinHandle<()>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Debounce an async closure on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    pub fn new<F, Fut>(quiet_period: Duration, f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::with_action(quiet_period, FnAction::new(f))
    }

    /// Debounce an [`Action`] on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime, like `tokio::spawn`.
    pub fn with_action(quiet_period: Duration, action: impl Action<A>) -> Self {
        Self::with_runtime(Handle::current(), quiet_period, action)
    }

    /// Debounce an [`Action`], scheduling timers on `runtime`.
    pub fn with_runtime(runtime: Handle, quiet_period: Duration, action: impl Action<A>) -> Self {
        Self {
            shared: Arc::new(Shared {
                action: Arc::new(action),
                quiet_period,
                runtime,
                slot: Mutex::new(Slot {
                    generation: 0,
                    pending: None,
                }),
            }),
        }
    }

    /// Schedule the action with `args`, replacing any invocation still
    /// waiting on this debouncer.
    ///
    /// Never runs the action inline, even with a zero quiet period.
    pub fn invoke(&self, args: A) {
        let mut slot = self.shared.slot.lock();

        if let Some(previous) = slot.pending.take() {
            previous.timer.abort();
            trace!(generation = previous.generation, "superseded pending invocation");
        }

        slot.generation = slot.generation.wrapping_add(1);
        let generation = slot.generation;

        let shared = Arc::clone(&self.shared);
        let timer = self.shared.runtime.spawn(async move {
            tokio::time::sleep(shared.quiet_period).await;
            shared.fire(generation).await;
        });

        slot.pending = Some(PendingInvocation {
            generation,
            args,
            timer,
        });
        trace!(generation, quiet_period = ?self.shared.quiet_period, "scheduled invocation");
    }

    /// Whether an invocation is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.shared.slot.lock().pending.is_some()
    }

    pub fn quiet_period(&self) -> Duration {
        self.shared.quiet_period
    }
}

impl<A: Send + 'static> Shared<A> {
    async fn fire(&self, generation: u64) {
        let args = {
            let mut slot = self.slot.lock();
            match slot.pending.take() {
                Some(pending) if pending.generation == generation => pending.args,
                other => {
                    // Superseded between waking and taking the lock.
                    slot.pending = other;
                    return;
                }
            }
        };

        debug!(generation, "quiet period elapsed, running action");
        self.action.run(args).await;
    }
}

impl<A: Send + 'static> Clone for Debouncer<A> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A: Send + 'static> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("quiet_period", &self.shared.quiet_period)
            .field("pending", &self.is_pending())
            .finish()
    }
}
