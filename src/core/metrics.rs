//! Emitter metrics for observability
//!
//! Transport failures never reach the caller, so these counters are the
//! only place they remain visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for emitter activity
///
/// # Example
///
/// ```
/// use logsfori::EmitterMetrics;
///
/// let metrics = EmitterMetrics::new();
///
/// metrics.record_event_sent();
/// metrics.record_transport_failure();
///
/// assert_eq!(metrics.events_sent(), 1);
/// assert_eq!(metrics.transport_failures(), 1);
/// ```
#[derive(Debug)]
pub struct EmitterMetrics {
    /// Events handed to the transport
    events_sent: AtomicU64,

    /// Events dropped by the minimum severity gate
    events_filtered: AtomicU64,

    /// Timer reports handed to the transport
    timers_sent: AtomicU64,

    /// `save_timer` calls for a name with no pending start
    missing_timers: AtomicU64,

    /// Requests the transport failed or panicked on
    transport_failures: AtomicU64,
}

impl EmitterMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            events_sent: AtomicU64::new(0),
            events_filtered: AtomicU64::new(0),
            timers_sent: AtomicU64::new(0),
            missing_timers: AtomicU64::new(0),
            transport_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn events_sent(&self) -> u64 {
        self.events_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn events_filtered(&self) -> u64 {
        self.events_filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn timers_sent(&self) -> u64 {
        self.timers_sent.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn missing_timers(&self) -> u64 {
        self.missing_timers.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn transport_failures(&self) -> u64 {
        self.transport_failures.load(Ordering::Relaxed)
    }

    /// Record an event handed to the transport
    #[inline]
    pub fn record_event_sent(&self) -> u64 {
        self.events_sent.fetch_add(1, Ordering::Relaxed)
    }

    /// Record an event below the minimum severity
    #[inline]
    pub fn record_event_filtered(&self) -> u64 {
        self.events_filtered.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a timer report handed to the transport
    #[inline]
    pub fn record_timer_sent(&self) -> u64 {
        self.timers_sent.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a `save_timer` with no pending start
    #[inline]
    pub fn record_missing_timer(&self) -> u64 {
        self.missing_timers.fetch_add(1, Ordering::Relaxed)
    }

    /// Record a failed request
    #[inline]
    pub fn record_transport_failure(&self) -> u64 {
        self.transport_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of requests that failed, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been sent.
    pub fn failure_rate(&self) -> f64 {
        let attempted = (self.events_sent() + self.timers_sent()) as f64;
        if attempted == 0.0 {
            0.0
        } else {
            (self.transport_failures() as f64 / attempted) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.events_sent.store(0, Ordering::Relaxed);
        self.events_filtered.store(0, Ordering::Relaxed);
        self.timers_sent.store(0, Ordering::Relaxed);
        self.missing_timers.store(0, Ordering::Relaxed);
        self.transport_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for EmitterMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EmitterMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            events_sent: AtomicU64::new(self.events_sent()),
            events_filtered: AtomicU64::new(self.events_filtered()),
            timers_sent: AtomicU64::new(self.timers_sent()),
            missing_timers: AtomicU64::new(self.missing_timers()),
            transport_failures: AtomicU64::new(self.transport_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = EmitterMetrics::new();
        assert_eq!(metrics.events_sent(), 0);
        assert_eq!(metrics.events_filtered(), 0);
        assert_eq!(metrics.timers_sent(), 0);
        assert_eq!(metrics.missing_timers(), 0);
        assert_eq!(metrics.transport_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = EmitterMetrics::new();
        assert_eq!(metrics.record_event_sent(), 0);
        assert_eq!(metrics.record_event_sent(), 1);
        assert_eq!(metrics.events_sent(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = EmitterMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..15 {
            metrics.record_event_sent();
        }
        for _ in 0..5 {
            metrics.record_timer_sent();
        }
        metrics.record_transport_failure();
        metrics.record_transport_failure();

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_filtered_not_counted_as_attempts() {
        let metrics = EmitterMetrics::new();
        metrics.record_event_filtered();
        metrics.record_missing_timer();
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_reset() {
        let metrics = EmitterMetrics::new();
        metrics.record_event_sent();
        metrics.record_event_filtered();
        metrics.record_transport_failure();

        metrics.reset();

        assert_eq!(metrics.events_sent(), 0);
        assert_eq!(metrics.events_filtered(), 0);
        assert_eq!(metrics.transport_failures(), 0);
    }

    #[test]
    fn test_clone_is_snapshot() {
        let metrics = EmitterMetrics::new();
        metrics.record_timer_sent();

        let snapshot = metrics.clone();
        metrics.record_timer_sent();

        assert_eq!(metrics.timers_sent(), 2);
        assert_eq!(snapshot.timers_sent(), 1);
    }
}
