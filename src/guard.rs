//! Dispose-once guards.
//!
//! Two flavors:
//! - [`ScopeGuard`] for the single-owner case: runs a callback when the
//!   guard drops, unless dismissed. Ownership already makes the callback
//!   at-most-once.
//! - [`DisposeGuard`] for the shared case: `dispose(&self)` may race from
//!   any number of threads and the callback still runs exactly once. The
//!   gate is an atomic swap; only the swap winner takes the callback.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// Runs a callback when dropped, unless dismissed first.
pub struct ScopeGuard<F: FnOnce()> {
    callback: Option<F>,
}

/// Create a guard that runs `callback` when it goes out of scope.
pub fn defer<F: FnOnce()>(callback: F) -> ScopeGuard<F> {
    ScopeGuard {
        callback: Some(callback),
    }
}

impl<F: FnOnce()> ScopeGuard<F> {
    /// Consume the guard without running the callback.
    pub fn dismiss(mut self) {
        self.callback = None;
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl<F: FnOnce()> fmt::Debug for ScopeGuard<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.callback.is_some())
            .finish()
    }
}

type DisposeFn = Box<dyn FnOnce() + Send>;

/// A disposal callback that runs at most once, no matter how many threads
/// call [`dispose`](Self::dispose) concurrently. Dropping the guard also
/// disposes it.
pub struct DisposeGuard {
    disposed: AtomicBool,
    callback: Mutex<Option<DisposeFn>>,
}

impl DisposeGuard {
    pub fn new(callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            disposed: AtomicBool::new(false),
            callback: Mutex::new(Some(Box::new(callback))),
        }
    }

    /// Run the callback if no one has yet. Returns `true` for the caller
    /// that actually ran it, `false` for everyone else.
    pub fn dispose(&self) -> bool {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return false;
        }
        // Swap winner; the callback is still parked here.
        let callback = match self.callback.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(callback) = callback {
            callback();
            true
        } else {
            false
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}

impl Drop for DisposeGuard {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DisposeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisposeGuard")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}
