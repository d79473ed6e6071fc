//! Process-wide entry points
//!
//! Free functions over [`Config::global`] and a lazily built shared emitter.
//! Each thread gets its own session, so with one request per thread the
//! default transaction id and pending timers are per request. Call
//! [`reset_session`] when a pooled thread picks up a new request.
//!
//! ```no_run
//! use logsfori::global;
//!
//! global::authenticate("my-token");
//! global::set_minimum_severity("warning").unwrap();
//!
//! global::start_timer("handler");
//! global::push_event("payment", "card declined", "error").unwrap();
//! global::save_timer("handler").unwrap();
//! ```

use crate::core::{
    Config, Dispatch, Emitter, LogsforiError, MemorySession, Result, SessionStore, Severity,
    TimerReport, Transport,
};
use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

static GLOBAL_EMITTER: OnceLock<Emitter> = OnceLock::new();

thread_local! {
    static CURRENT_SESSION: RefCell<Option<Arc<dyn SessionStore>>> = const { RefCell::new(None) };
}

fn root() -> &'static Emitter {
    GLOBAL_EMITTER.get_or_init(|| Emitter::builder().global_config().build())
}

/// Replace the default HTTP transport of the shared emitter
///
/// # Errors
///
/// `InvalidConfiguration` if the shared emitter was already used or installed.
pub fn install_transport<T: Transport + 'static>(transport: T) -> Result<()> {
    let emitter = Emitter::builder()
        .global_config()
        .transport(transport)
        .build();
    GLOBAL_EMITTER
        .set(emitter)
        .map_err(|_| LogsforiError::config("global emitter", "transport already initialized"))
}

fn current_session() -> Arc<dyn SessionStore> {
    CURRENT_SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        Arc::clone(slot.get_or_insert_with(|| Arc::new(MemorySession::new()) as Arc<dyn SessionStore>))
    })
}

/// Bind this thread to `session`
pub fn set_session(session: Arc<dyn SessionStore>) {
    CURRENT_SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

/// Drop this thread's session; the next call starts a fresh one
pub fn reset_session() {
    CURRENT_SESSION.with(|cell| *cell.borrow_mut() = None);
}

pub fn session_id() -> String {
    current_session().id()
}

/// Run `f` with the shared emitter bound to this thread's session
pub fn with_emitter<R>(f: impl FnOnce(&Emitter) -> R) -> R {
    let emitter = root().for_session(current_session());
    f(&emitter)
}

pub fn config() -> &'static Config {
    Config::global()
}

pub fn authenticate(token: impl Into<String>) {
    Config::global().authenticate(token);
}

pub fn authenticate_with_endpoint(token: impl Into<String>, endpoint: impl Into<String>) {
    Config::global().authenticate_with_endpoint(token, endpoint);
}

/// # Errors
///
/// `InvalidSeverity` if `severity` is not a known level.
pub fn set_minimum_severity(severity: &str) -> Result<()> {
    Config::global().set_minimum_severity(severity)
}

pub fn minimum_severity() -> Severity {
    Config::global().minimum_severity()
}

/// # Errors
///
/// `TokenRequired` before `authenticate`, `InvalidSeverity` for an unknown level.
pub fn push_event(
    event_name: impl Into<String>,
    message: impl Into<String>,
    severity: &str,
) -> Result<Dispatch> {
    with_emitter(|emitter| emitter.push_event(event_name, message, severity))
}

pub fn start_timer(name: &str) {
    with_emitter(|emitter| emitter.start_timer(name));
}

/// # Errors
///
/// `TokenRequired` if a started timer is saved before `authenticate`.
pub fn save_timer(name: &str) -> Result<Option<TimerReport>> {
    with_emitter(|emitter| emitter.save_timer(name))
}
