//! Logger metrics for observability
//!
//! Counters for what happened to each `log` call: emitted, filtered by
//! level, emitted truncated, or dropped because of an internal failure.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use rust_ulog::UlogMetrics;
///
/// let metrics = UlogMetrics::new();
/// metrics.record_emitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.lines_emitted(), 1);
/// assert_eq!(metrics.lines_filtered(), 1);
/// ```
#[derive(Debug)]
pub struct UlogMetrics {
    /// Lines written to the output appender
    lines_emitted: AtomicU64,

    /// Calls rejected by the module's level threshold
    lines_filtered: AtomicU64,

    /// Emitted lines that did not fit the scratch buffer
    lines_truncated: AtomicU64,

    /// Calls that failed on the lock or the output appender
    lines_dropped: AtomicU64,
}

impl UlogMetrics {
    pub const fn new() -> Self {
        Self {
            lines_emitted: AtomicU64::new(0),
            lines_filtered: AtomicU64::new(0),
            lines_truncated: AtomicU64::new(0),
            lines_dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn lines_emitted(&self) -> u64 {
        self.lines_emitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_filtered(&self) -> u64 {
        self.lines_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_truncated(&self) -> u64 {
        self.lines_truncated.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn lines_dropped(&self) -> u64 {
        self.lines_dropped.load(Ordering::Relaxed)
    }

    /// Record an emitted line, returning the previous count
    #[inline]
    pub fn record_emitted(&self) -> u64 {
        self.lines_emitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.lines_filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_truncated(&self) -> u64 {
        self.lines_truncated.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.lines_dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Percentage of attempted lines that were dropped (0.0 - 100.0)
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.lines_dropped() as f64;
        let total = self.lines_emitted() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.lines_emitted.store(0, Ordering::Relaxed);
        self.lines_filtered.store(0, Ordering::Relaxed);
        self.lines_truncated.store(0, Ordering::Relaxed);
        self.lines_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for UlogMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for UlogMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            lines_emitted: AtomicU64::new(self.lines_emitted()),
            lines_filtered: AtomicU64::new(self.lines_filtered()),
            lines_truncated: AtomicU64::new(self.lines_truncated()),
            lines_dropped: AtomicU64::new(self.lines_dropped()),
        }
    }
}
