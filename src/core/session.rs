//! Session scope backing transaction ids and pending timers
//!
//! A session plays the role of the host's request/session key-value scope:
//! it supplies the default `transaction_id` for events and holds the start
//! instants of running timers. Timers never leak between sessions.

use parking_lot::Mutex;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::collections::HashMap;
use std::time::Instant;

const SESSION_ID_LEN: usize = 26;

/// Key-value scope for one session
pub trait SessionStore: Send + Sync {
    /// Identifier used as the default transaction id
    fn id(&self) -> String;

    /// Start instant of a running timer
    fn timer_start(&self, name: &str) -> Option<Instant>;

    /// Record a start instant, replacing any pending one for `name`
    fn set_timer_start(&self, name: &str, start: Instant);

    /// Remove and return the start instant for `name`
    fn take_timer_start(&self, name: &str) -> Option<Instant>;
}

/// Random lowercase alphanumeric session id
pub fn generate_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// In-process session with a generated or caller-supplied id
#[derive(Debug)]
pub struct MemorySession {
    id: String,
    timers: Mutex<HashMap<String, Instant>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::with_id(generate_session_id())
    }

    /// Session bound to an existing id (e.g. a request id from the host)
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            timers: Mutex::new(HashMap::new()),
        }
    }

    /// Number of timers started but not yet saved
    pub fn pending_timers(&self) -> usize {
        self.timers.lock().len()
    }
}

impl Default for MemorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for MemorySession {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn timer_start(&self, name: &str) -> Option<Instant> {
        self.timers.lock().get(name).copied()
    }

    fn set_timer_start(&self, name: &str, start: Instant) {
        self.timers.lock().insert(name.to_string(), start);
    }

    fn take_timer_start(&self, name: &str) -> Option<Instant> {
        self.timers.lock().remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_session_id();
        assert_eq!(id.len(), SESSION_ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_session_id(), generate_session_id());
    }

    #[test]
    fn test_with_id() {
        let session = MemorySession::with_id("req-42");
        assert_eq!(session.id(), "req-42");
    }

    #[test]
    fn test_timer_lifecycle() {
        let session = MemorySession::new();
        assert!(session.timer_start("db").is_none());

        let start = Instant::now();
        session.set_timer_start("db", start);
        assert_eq!(session.timer_start("db"), Some(start));
        assert_eq!(session.pending_timers(), 1);

        assert_eq!(session.take_timer_start("db"), Some(start));
        assert!(session.take_timer_start("db").is_none());
        assert_eq!(session.pending_timers(), 0);
    }

    #[test]
    fn test_last_start_wins() {
        let session = MemorySession::new();
        let first = Instant::now();
        let second = first + Duration::from_millis(10);

        session.set_timer_start("x", first);
        session.set_timer_start("x", second);
        assert_eq!(session.take_timer_start("x"), Some(second));
    }

    #[test]
    fn test_names_are_independent() {
        let session = MemorySession::new();
        session.set_timer_start("a", Instant::now());
        session.set_timer_start("b", Instant::now());

        session.take_timer_start("a");
        assert!(session.timer_start("b").is_some());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let one = MemorySession::new();
        let two = MemorySession::new();
        one.set_timer_start("x", Instant::now());
        assert!(two.timer_start("x").is_none());
    }
}
