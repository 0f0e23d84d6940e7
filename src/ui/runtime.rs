//! State containers and the staleness guard used by view controllers.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;

/// Shared, lock-protected state driven by a single reducer.
pub struct Store<R: Reducer> {
    state: Arc<Mutex<R::State>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(Mutex::new(initial)),
        }
    }

    pub fn snapshot(&self) -> R::State {
        self.state.lock().clone()
    }

    /// Apply `intent` and return the new state.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        self.transition(intent).1
    }

    /// Apply `intent` and return `(before, after)`, observed under one lock
    /// so callers can tell whether *their* intent caused a transition.
    pub fn transition(&self, intent: R::Intent) -> (R::State, R::State) {
        let mut guard = self.state.lock();
        let before = std::mem::take(&mut *guard);
        let after = R::reduce(before.clone(), intent);
        *guard = after.clone();
        (before, after)
    }
}

/// Ticket handed out when a load starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Tracks whether a view is mounted and which load is the newest.
///
/// Requests are never cancelled; a result is applied only if the view is
/// still mounted and no newer load has started since.
#[derive(Debug, Clone, Default)]
pub struct ViewGuard {
    inner: Arc<GuardInner>,
}

#[derive(Debug, Default)]
struct GuardInner {
    mounted: AtomicBool,
    generation: AtomicU64,
}

impl ViewGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&self) {
        self.inner.mounted.store(true, Ordering::SeqCst);
    }

    /// Unmount and invalidate every outstanding ticket.
    pub fn unmount(&self) {
        self.inner.mounted.store(false, Ordering::SeqCst);
        self.inner.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::SeqCst)
    }

    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.is_mounted() && self.inner.generation.load(Ordering::SeqCst) == ticket.0
    }
}
