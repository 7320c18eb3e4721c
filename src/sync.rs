//! Cancellation primitives for the search.
//!
//! The search is single-threaded; cancellation is cooperative. Every frame
//! polls a `CancelToken` before doing work and unwinds as soon as it trips.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// A shareable stop flag.
///
/// This wraps `Arc<AtomicBool>` so clones observe the same flag.
#[derive(Clone, Debug)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    /// Create a new stop flag (initially not stopped).
    #[must_use]
    pub fn new() -> Self {
        StopFlag(Arc::new(AtomicBool::new(false)))
    }

    #[inline]
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for StopFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// Stop flag paired with an optional wall-clock deadline.
///
/// `poll` observes the flag first and only samples the clock while the
/// flag is clear; once the deadline passes the flag stays set until `reset`.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: StopFlag,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that only trips when stopped explicitly.
    #[must_use]
    pub fn unbounded() -> Self {
        CancelToken::default()
    }

    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        CancelToken {
            flag: StopFlag::new(),
            deadline: Some(deadline),
        }
    }

    /// True if the search must unwind now.
    #[inline]
    pub fn poll(&self) -> bool {
        if self.flag.is_stopped() {
            return true;
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.flag.stop();
                true
            }
            _ => false,
        }
    }

    /// True if the flag has tripped, without sampling the clock.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.is_stopped()
    }

    #[inline]
    pub fn cancel(&self) {
        self.flag.stop();
    }

    /// Clear the flag before a new search pass.
    #[inline]
    pub fn reset(&self) {
        self.flag.reset();
    }
}
