//! Cooperative cancellation for long-running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A cancellation token backed by an [`AtomicBool`], with an optional
/// deadline.
///
/// Clones share the same flag, so one clone can be handed to a search while
/// another stays with the caller to call [`cancel`](Context::cancel).
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl Context {
    /// Create a new, non-cancelled context without a deadline.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            deadline: None,
        }
    }

    /// A context that counts as done once `deadline` has passed.
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::new()
        }
    }

    /// A context that counts as done `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// The deadline, if any.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether cancellation has been requested or the deadline has passed.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.is_cancelled() || self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
        assert!(other.is_cancelled());
    }

    #[test]
    fn past_deadline_is_done() {
        let ctx = Context::with_deadline(Instant::now());
        assert!(ctx.is_done());
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn far_deadline_is_not_done() {
        let ctx = Context::with_timeout(Duration::from_secs(3600));
        assert!(!ctx.is_done());
        assert!(ctx.deadline().is_some());
    }
}
