//! Cooperative cancellation of a running trace
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A cheaply clonable flag used to stop a running trace.
///
/// All clones share the same state. The tracer checks the flag between two rays taken from its work stack.
/// A cancelled trace returns all ray paths finalized so far.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}
impl CancellationToken {
    /// Creates a new (not cancelled) [`CancellationToken`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
    /// Returns `true` if cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
