//! Event and timer emitter

use super::{
    config::Config,
    error::{LogsforiError, Result},
    event_builder::{EventBuilder, PendingEvent},
    metrics::EmitterMetrics,
    payload::{LogEvent, TimerReport, PUSH_LOG_PATH, TIMER_PATH},
    session::{MemorySession, SessionStore},
    severity::{validate_severity, Severity},
    timestamp::{elapsed_millis, now_millis},
    transport::Transport,
};
use serde::Serialize;
use std::any::Any;
use std::sync::{Arc, OnceLock};
use std::time::{Duration, Instant};

/// Outcome of a successful `push`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Handed to the transport. Delivery itself is best-effort.
    Sent,
    /// Below the minimum severity; nothing was sent
    Filtered,
}

impl Dispatch {
    pub fn is_sent(&self) -> bool {
        matches!(self, Dispatch::Sent)
    }
}

/// Emits events and timer reports for one session.
///
/// Config, transport and metrics are shared by every emitter derived with
/// [`Emitter::for_session`]; the session (transaction id and pending timers)
/// is not. The session is created lazily on first use when none was given.
pub struct Emitter {
    config: Config,
    transport: Arc<dyn Transport>,
    session: OnceLock<Arc<dyn SessionStore>>,
    metrics: Arc<EmitterMetrics>,
}

impl Emitter {
    /// Emitter with a fresh unauthenticated config and the default transport
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[must_use]
    pub fn builder() -> EmitterBuilder {
        EmitterBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn metrics(&self) -> &EmitterMetrics {
        &self.metrics
    }

    pub fn transport_name(&self) -> &str {
        self.transport.name()
    }

    /// Derive an emitter bound to `session`, sharing config, transport and metrics
    pub fn for_session(&self, session: Arc<dyn SessionStore>) -> Emitter {
        let cell = OnceLock::new();
        let _ = cell.set(session);
        Emitter {
            config: self.config.clone(),
            transport: Arc::clone(&self.transport),
            session: cell,
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Derive an emitter with a brand new in-memory session
    pub fn new_session(&self) -> Emitter {
        self.for_session(Arc::new(MemorySession::new()))
    }

    /// The active session, started on first access
    pub fn session(&self) -> Arc<dyn SessionStore> {
        Arc::clone(
            self.session
                .get_or_init(|| Arc::new(MemorySession::new()) as Arc<dyn SessionStore>),
        )
    }

    pub fn session_id(&self) -> String {
        self.session().id()
    }

    pub fn authenticate(&self, token: impl Into<String>) {
        self.config.authenticate(token);
    }

    pub fn authenticate_with_endpoint(&self, token: impl Into<String>, endpoint: impl Into<String>) {
        self.config.authenticate_with_endpoint(token, endpoint);
    }

    /// # Errors
    ///
    /// `InvalidSeverity` if `severity` is not a known level.
    pub fn set_minimum_severity(&self, severity: &str) -> Result<()> {
        self.config.set_minimum_severity(severity)
    }

    pub fn minimum_severity(&self) -> Severity {
        self.config.minimum_severity()
    }

    /// Start building an event; defaults to `info` severity
    pub fn event(&self, event_name: impl Into<String>, message: impl Into<String>) -> EventBuilder<'_> {
        EventBuilder::new(self, event_name.into(), message.into())
    }

    /// Push an event with default timestamp, transaction id and no extra fields
    ///
    /// # Errors
    ///
    /// `TokenRequired` before `authenticate`, `InvalidSeverity` for an unknown
    /// level. Transport failures are never returned.
    pub fn push_event(
        &self,
        event_name: impl Into<String>,
        message: impl Into<String>,
        severity: &str,
    ) -> Result<Dispatch> {
        self.event(event_name, message).severity(severity).push()
    }

    #[inline]
    pub fn debug(&self, event_name: impl Into<String>, message: impl Into<String>) -> Result<Dispatch> {
        self.event(event_name, message).level(Severity::Debug).push()
    }

    #[inline]
    pub fn info(&self, event_name: impl Into<String>, message: impl Into<String>) -> Result<Dispatch> {
        self.event(event_name, message).level(Severity::Info).push()
    }

    #[inline]
    pub fn warning(&self, event_name: impl Into<String>, message: impl Into<String>) -> Result<Dispatch> {
        self.event(event_name, message).level(Severity::Warning).push()
    }

    #[inline]
    pub fn error(&self, event_name: impl Into<String>, message: impl Into<String>) -> Result<Dispatch> {
        self.event(event_name, message).level(Severity::Error).push()
    }

    #[inline]
    pub fn critical(&self, event_name: impl Into<String>, message: impl Into<String>) -> Result<Dispatch> {
        self.event(event_name, message).level(Severity::Critical).push()
    }

    pub(crate) fn emit_event(&self, pending: PendingEvent) -> Result<Dispatch> {
        let session = self.session();
        let config = self.config.snapshot();

        let token = config.token().ok_or(LogsforiError::TokenRequired)?;
        let severity = validate_severity(&pending.severity)?;

        if !severity.passes(config.minimum_severity) {
            self.metrics.record_event_filtered();
            log::debug!(
                "logsfori: dropped '{}' at {} (minimum {})",
                pending.event_name,
                severity,
                config.minimum_severity
            );
            return Ok(Dispatch::Filtered);
        }

        let event = LogEvent {
            transaction_id: pending.transaction_id.unwrap_or_else(|| session.id()),
            token: token.to_string(),
            event_name: pending.event_name,
            message: pending.message,
            severity,
            created_at: pending.timestamp.unwrap_or_else(now_millis),
            extra: pending.extra,
        };

        self.deliver(&config.url(PUSH_LOG_PATH), &event)?;
        self.metrics.record_event_sent();
        Ok(Dispatch::Sent)
    }

    /// Record the start instant for `name`, replacing a pending start
    pub fn start_timer(&self, name: &str) {
        self.session().set_timer_start(name, Instant::now());
    }

    pub fn is_timer_running(&self, name: &str) -> bool {
        self.session().timer_start(name).is_some()
    }

    /// Stop `name` and report its elapsed time
    ///
    /// Returns `Ok(None)` without sending anything if `name` was never started
    /// (or was already saved).
    ///
    /// # Errors
    ///
    /// `TokenRequired` if no token is configured. The timer is still
    /// consumed in that case.
    pub fn save_timer(&self, name: &str) -> Result<Option<TimerReport>> {
        let Some(start) = self.session().take_timer_start(name) else {
            self.metrics.record_missing_timer();
            log::debug!("logsfori: no running timer named '{}'", name);
            return Ok(None);
        };
        let execution_time = elapsed_millis(start);

        let config = self.config.snapshot();
        let token = config.token().ok_or(LogsforiError::TokenRequired)?;

        let report = TimerReport {
            func_name: name.to_string(),
            token: token.to_string(),
            execution_time,
            created_at: now_millis(),
        };

        self.deliver(&config.url(TIMER_PATH), &report)?;
        self.metrics.record_timer_sent();
        Ok(Some(report))
    }

    /// Time a closure under `name` and report it
    ///
    /// # Errors
    ///
    /// `TokenRequired` if no token is configured; the closure has run by then.
    pub fn measure<T>(&self, name: &str, f: impl FnOnce() -> T) -> Result<T> {
        self.start_timer(name);
        let value = f();
        self.save_timer(name)?;
        Ok(value)
    }

    /// Serialize and post. Transport errors and panics are counted and
    /// logged, never returned.
    fn deliver<T: Serialize>(&self, url: &str, payload: &T) -> Result<()> {
        let body = serde_json::to_vec(payload)?;

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.transport.post_json(url, &body)
        }));

        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                self.metrics.record_transport_failure();
                log::warn!("logsfori: {} transport failed: {}", self.transport.name(), e);
            }
            Err(panic_info) => {
                self.metrics.record_transport_failure();
                log::error!(
                    "logsfori: {} transport panicked posting to {}: {}",
                    self.transport.name(),
                    url,
                    panic_message(&*panic_info)
                );
            }
        }
        Ok(())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing an Emitter with a fluent API
///
/// # Example
/// ```
/// use logsfori::prelude::*;
/// use logsfori::transports::MemoryTransport;
///
/// let config = Config::new();
/// config.authenticate("my-token");
///
/// let emitter = Emitter::builder()
///     .config(config)
///     .transport(MemoryTransport::new())
///     .session(MemorySession::with_id("req-1"))
///     .build();
///
/// assert_eq!(emitter.session_id(), "req-1");
/// ```
pub struct EmitterBuilder {
    config: Option<Config>,
    transport: Option<Arc<dyn Transport>>,
    session: Option<Arc<dyn SessionStore>>,
    timeout: Option<Duration>,
}

impl EmitterBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            transport: None,
            session: None,
            timeout: None,
        }
    }

    /// Share an existing configuration handle
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use the process-wide configuration
    #[must_use = "builder methods return a new value"]
    pub fn global_config(self) -> Self {
        self.config(Config::global().clone())
    }

    #[must_use = "builder methods return a new value"]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn session<S: SessionStore + 'static>(mut self, session: S) -> Self {
        self.session = Some(Arc::new(session));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_session(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    /// Request timeout for the default HTTP transport
    ///
    /// Ignored when a transport is set explicitly.
    #[must_use = "builder methods return a new value"]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Emitter {
        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport(self.timeout),
        };

        let session = OnceLock::new();
        if let Some(s) = self.session {
            let _ = session.set(s);
        }

        Emitter {
            config: self.config.unwrap_or_default(),
            transport,
            session,
            metrics: Arc::new(EmitterMetrics::new()),
        }
    }
}

impl Default for EmitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "http")]
fn default_transport(timeout: Option<Duration>) -> Arc<dyn Transport> {
    use crate::transports::http::{HttpTransport, DEFAULT_TIMEOUT};
    Arc::new(HttpTransport::with_timeout(timeout.unwrap_or(DEFAULT_TIMEOUT)))
}

#[cfg(not(feature = "http"))]
fn default_transport(_timeout: Option<Duration>) -> Arc<dyn Transport> {
    log::warn!("logsfori: built without the `http` feature; requests are kept in memory");
    Arc::new(crate::transports::MemoryTransport::new())
}
