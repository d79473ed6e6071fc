//! Clock helpers for payload timestamps and timer durations

use chrono::Utc;
use std::time::{Duration, Instant};

/// Current wall-clock time in milliseconds since the Unix epoch
#[inline]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Round a millisecond value to two decimal places
#[inline]
pub fn round_millis(ms: f64) -> f64 {
    (ms * 100.0).round() / 100.0
}

/// Duration expressed as fractional milliseconds, rounded to two decimals
pub fn duration_millis(duration: Duration) -> f64 {
    round_millis(duration.as_secs_f64() * 1000.0)
}

/// Milliseconds elapsed since `start`, rounded to two decimals
pub fn elapsed_millis(start: Instant) -> f64 {
    duration_millis(start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_epoch_ms() {
        let now = now_millis();
        // 2020-01-01T00:00:00Z
        assert!(now > 1_577_836_800_000);
        // still milliseconds, not microseconds
        assert!(now < 100_000_000_000_000);
    }

    #[test]
    fn test_round_millis() {
        assert_eq!(round_millis(1.234), 1.23);
        assert_eq!(round_millis(1.235_1), 1.24);
        assert_eq!(round_millis(0.0), 0.0);
        assert_eq!(round_millis(12.0), 12.0);
    }

    #[test]
    fn test_duration_millis() {
        assert_eq!(duration_millis(Duration::from_micros(1_234_567)), 1234.57);
        assert_eq!(duration_millis(Duration::from_millis(5)), 5.0);
        assert_eq!(duration_millis(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_elapsed_millis_non_negative() {
        let start = Instant::now();
        let elapsed = elapsed_millis(start);
        assert!(elapsed >= 0.0);
        assert!(elapsed < 50.0);
    }
}
