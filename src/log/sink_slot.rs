//! Storage for the installed sink.
//!
//! Hosted builds guard the slot with a mutex that the logger holds for a whole
//! format-and-dispatch sequence. Bare-metal builds have no preemptive threads,
//! so the slot is a plain cell and no lock is taken.

use crate::log::log_sink::{LogSink, SinkRef};

#[cfg(feature = "std")]
pub(crate) struct SinkSlot {
    inner: std::sync::Mutex<Option<SinkRef>>,
}

#[cfg(feature = "std")]
impl SinkSlot {
    pub(crate) const fn new() -> Self {
        Self {
            inner: std::sync::Mutex::new(None),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SinkRef>> {
        // A sink that panicked mid-call leaves the slot itself intact.
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Runs `f` with the current sink while holding the lock.
    pub(crate) fn with<R>(&self, f: impl FnOnce(Option<&dyn LogSink>) -> R) -> R {
        let guard = self.lock();
        f(guard.as_deref())
    }

    pub(crate) fn replace(&self, sink: Option<SinkRef>) {
        let previous = {
            let mut guard = self.lock();
            core::mem::replace(&mut *guard, sink)
        };
        // Dropped outside the lock: a sink's Drop may itself log.
        drop(previous);
    }

    pub(crate) fn is_set(&self) -> bool {
        self.lock().is_some()
    }
}

#[cfg(not(feature = "std"))]
pub(crate) struct SinkSlot {
    inner: core::cell::UnsafeCell<Option<SinkRef>>,
}

// SAFETY: bare-metal targets run the logger from a single execution context.
// Callers must not log or replace the sink from an interrupt handler while the
// main context is inside a logger call.
#[cfg(not(feature = "std"))]
unsafe impl Sync for SinkSlot {}

#[cfg(not(feature = "std"))]
impl SinkSlot {
    pub(crate) const fn new() -> Self {
        Self {
            inner: core::cell::UnsafeCell::new(None),
        }
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(Option<&dyn LogSink>) -> R) -> R {
        // SAFETY: see the `Sync` impl; no other reference is live.
        let sink = unsafe { *self.inner.get() };
        f(sink)
    }

    pub(crate) fn replace(&self, sink: Option<SinkRef>) {
        // SAFETY: see the `Sync` impl; no other reference is live.
        unsafe { *self.inner.get() = sink };
    }

    pub(crate) fn is_set(&self) -> bool {
        // SAFETY: see the `Sync` impl; no other reference is live.
        unsafe { (*self.inner.get()).is_some() }
    }
}
