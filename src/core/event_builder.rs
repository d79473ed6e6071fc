//! Fluent construction of `push-log` events
//!
//! Every optional input of a push (severity, timestamp, extra fields,
//! transaction id) has a builder method; unset ones take their defaults
//! when the event is pushed.

use super::emitter::{Dispatch, Emitter};
use super::error::Result;
use super::extra::Extra;
use super::severity::Severity;
use serde_json::Value;

/// Inputs of one push, before defaults are resolved
#[derive(Debug, Clone)]
pub(crate) struct PendingEvent {
    pub event_name: String,
    pub message: String,
    pub severity: String,
    pub timestamp: Option<i64>,
    pub extra: Extra,
    pub transaction_id: Option<String>,
}

/// Builder for a single event
///
/// # Example
///
/// ```
/// use logsfori::prelude::*;
/// use logsfori::transports::MemoryTransport;
///
/// let emitter = Emitter::builder().transport(MemoryTransport::new()).build();
/// emitter.authenticate("my-token");
///
/// let outcome = emitter
///     .event("checkout", "order placed")
///     .level(Severity::Warning)
///     .field("order_id", 1234)
///     .field("amount", 99.5)
///     .transaction_id("req-77")
///     .push()?;
///
/// assert!(outcome.is_sent());
/// # Ok::<(), logsfori::LogsforiError>(())
/// ```
#[must_use = "an event is only sent once `push` is called"]
pub struct EventBuilder<'a> {
    emitter: &'a Emitter,
    pending: PendingEvent,
}

impl<'a> EventBuilder<'a> {
    pub(crate) fn new(emitter: &'a Emitter, event_name: String, message: String) -> Self {
        Self {
            emitter,
            pending: PendingEvent {
                event_name,
                message,
                severity: Severity::default().as_str().to_string(),
                timestamp: None,
                extra: Extra::new(),
                transaction_id: None,
            },
        }
    }

    /// Severity by wire name; validated when the event is pushed
    pub fn severity(mut self, severity: impl Into<String>) -> Self {
        self.pending.severity = severity.into();
        self
    }

    pub fn level(mut self, level: Severity) -> Self {
        self.pending.severity = level.as_str().to_string();
        self
    }

    /// Explicit `created_at`, in milliseconds since epoch
    pub fn timestamp(mut self, millis: i64) -> Self {
        self.pending.timestamp = Some(millis);
        self
    }

    /// Merge a set of extra fields
    pub fn extra(mut self, extra: Extra) -> Self {
        self.pending.extra.merge(extra);
        self
    }

    /// Add one extra field
    pub fn field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.pending.extra.add_field(key, value);
        self
    }

    /// Override the session-derived transaction id
    pub fn transaction_id(mut self, transaction_id: impl Into<String>) -> Self {
        self.pending.transaction_id = Some(transaction_id.into());
        self
    }

    /// Validate, gate and send the event
    ///
    /// # Errors
    ///
    /// `TokenRequired` before `authenticate`, `InvalidSeverity` for an unknown
    /// level. Transport failures are never returned.
    pub fn push(self) -> Result<Dispatch> {
        self.emitter.emit_event(self.pending)
    }
}
