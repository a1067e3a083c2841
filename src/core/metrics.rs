//! Handler metrics for observability
//!
//! [`Metered`] wraps any handler and counts what it did with each record.
//! Counting happens inside the wrapped link, so the dispatch loop itself
//! stays free of shared state.

use super::{
    error::Result,
    handler::{Handler, HandlerOutcome},
    record::Record,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Outcome counters for a single handler
///
/// # Example
///
/// ```
/// use monolog::HandlerMetrics;
///
/// let metrics = HandlerMetrics::new();
///
/// metrics.record_handled();
/// metrics.record_passed();
///
/// assert_eq!(metrics.handled_count(), 1);
/// assert_eq!(metrics.total(), 2);
/// ```
#[derive(Debug, Default)]
pub struct HandlerMetrics {
    /// Records the handler did not act on
    passed: AtomicU64,

    /// Records handled with the chain continuing
    handled: AtomicU64,

    /// Records handled with the chain stopped
    finished: AtomicU64,

    /// Records for which the handler returned an error
    failed: AtomicU64,
}

impl HandlerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            passed: AtomicU64::new(0),
            handled: AtomicU64::new(0),
            finished: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn passed_count(&self) -> u64 {
        self.passed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn handled_count(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn finished_count(&self) -> u64 {
        self.finished.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Every record offered to the handler
    pub fn total(&self) -> u64 {
        self.passed_count() + self.handled_count() + self.finished_count() + self.failed_count()
    }

    #[inline]
    pub fn record_passed(&self) -> u64 {
        self.passed.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handled(&self) -> u64 {
        self.handled.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_finished(&self) -> u64 {
        self.finished.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    pub fn record_outcome(&self, outcome: HandlerOutcome) -> u64 {
        match outcome {
            HandlerOutcome::Passed => self.record_passed(),
            HandlerOutcome::Handled => self.record_handled(),
            HandlerOutcome::Finished => self.record_finished(),
        }
    }

    /// Share of offered records the handler claimed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no records have been offered.
    pub fn claim_rate(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            0.0
        } else {
            ((self.handled_count() + self.finished_count()) as f64 / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.passed.store(0, Ordering::Relaxed);
        self.handled.store(0, Ordering::Relaxed);
        self.finished.store(0, Ordering::Relaxed);
        self.failed.store(0, Ordering::Relaxed);
    }
}

/// A handler that counts the outcomes of the handler it wraps.
///
/// Outcomes and errors are returned unchanged.
pub struct Metered<H> {
    inner: H,
    metrics: Arc<HandlerMetrics>,
}

impl<H: Handler> Metered<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            metrics: Arc::new(HandlerMetrics::new()),
        }
    }

    /// Shared handle to the counters, usable after the handler has been
    /// moved into a chain.
    pub fn metrics(&self) -> Arc<HandlerMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: Handler> Handler for Metered<H> {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        match self.inner.dispatch(record) {
            Ok(outcome) => {
                self.metrics.record_outcome(outcome);
                Ok(outcome)
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
