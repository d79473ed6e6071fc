//! Property-based tests for logsfori using proptest

use logsfori::prelude::*;
use logsfori::core::timestamp::{duration_millis, round_millis};
use logsfori::transports::MemoryTransport;
use proptest::prelude::*;
use std::time::Duration;

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
        Just(Severity::Critical),
    ]
}

// ============================================================================
// Severity Tests
// ============================================================================

proptest! {
    /// Wire names parse back to the same level
    #[test]
    fn test_severity_str_roundtrip(level in any_severity()) {
        let parsed: Severity = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
        prop_assert_eq!(format!("{}", level), level.as_str());
    }

    /// Ordering follows the ordinal
    #[test]
    fn test_severity_ordering(a in any_severity(), b in any_severity()) {
        prop_assert_eq!(a < b, a.ordinal() < b.ordinal());
        prop_assert_eq!(a >= b, a.ordinal() >= b.ordinal());
    }

    /// Anything but the five exact lowercase names is rejected
    #[test]
    fn test_unknown_severity_rejected(s in "\\PC*") {
        let known = ["debug", "info", "warning", "error", "critical"];
        prop_assume!(!known.contains(&s.as_str()));
        prop_assert!(
            matches!(validate_severity(&s), Err(LogsforiError::InvalidSeverity { .. })),
            "{:?} should be rejected",
            s
        );
    }

    /// Uppercased names are never accepted
    #[test]
    fn test_severity_case_sensitive(level in any_severity()) {
        prop_assert!(validate_severity(&level.as_str().to_uppercase()).is_err());
    }
}

// ============================================================================
// Gate Tests
// ============================================================================

proptest! {
    /// An event is sent exactly when its level reaches the minimum
    #[test]
    fn test_gate_matches_ordinal(level in any_severity(), minimum in any_severity()) {
        let transport = MemoryTransport::new();
        let emitter = Emitter::builder().transport(transport.clone()).build();
        emitter.authenticate("tok");
        emitter.config().set_minimum_level(minimum);

        let outcome = emitter.event("e", "m").level(level).push().unwrap();

        let should_send = level.ordinal() >= minimum.ordinal();
        prop_assert_eq!(outcome.is_sent(), should_send);
        prop_assert_eq!(transport.len(), usize::from(should_send));
    }

    /// A rejected threshold never changes the configured one
    #[test]
    fn test_bad_threshold_is_noop(minimum in any_severity(), bogus in "[A-Z]{1,8}") {
        let config = Config::new();
        config.set_minimum_level(minimum);
        prop_assert!(config.set_minimum_severity(&bogus).is_err());
        prop_assert_eq!(config.minimum_severity(), minimum);
    }

    /// Caller-supplied fields land in the body untouched
    #[test]
    fn test_event_fields_preserved(
        name in "[a-z_]{1,16}",
        message in "\\PC{0,64}",
        created_at in 0i64..4_102_444_800_000,
        tx in "[a-z0-9-]{1,26}",
    ) {
        let transport = MemoryTransport::new();
        let emitter = Emitter::builder().transport(transport.clone()).build();
        emitter.authenticate("tok");

        emitter
            .event(name.clone(), message.clone())
            .timestamp(created_at)
            .transaction_id(tx.clone())
            .push()
            .unwrap();

        let body = transport.requests()[0].json().unwrap();
        prop_assert_eq!(body["event_name"].as_str().unwrap(), name.as_str());
        prop_assert_eq!(body["message"].as_str().unwrap(), message.as_str());
        prop_assert_eq!(body["created_at"].as_i64().unwrap(), created_at);
        prop_assert_eq!(body["transaction_id"].as_str().unwrap(), tx.as_str());
    }
}

// ============================================================================
// Timer Rounding Tests
// ============================================================================

proptest! {
    /// Rounded values are within half a hundredth of the input
    #[test]
    fn test_round_millis_close(ms in 0.0f64..1_000_000.0) {
        let rounded = round_millis(ms);
        prop_assert!((rounded - ms).abs() <= 0.005 + 1e-9);
    }

    /// Rounding is idempotent
    #[test]
    fn test_round_millis_idempotent(ms in 0.0f64..1_000_000.0) {
        let once = round_millis(ms);
        prop_assert_eq!(round_millis(once), once);
    }

    /// Durations are reported in milliseconds, never negative
    #[test]
    fn test_duration_millis_scale(micros in 0u64..10_000_000) {
        let ms = duration_millis(Duration::from_micros(micros));
        prop_assert!(ms >= 0.0);
        prop_assert!((ms - micros as f64 / 1000.0).abs() <= 0.005 + 1e-9);
    }
}
