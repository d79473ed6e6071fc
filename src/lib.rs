//! # logsfori
//!
//! Client for the LogsForI collector. Discrete events and named timer
//! measurements are formatted as JSON and posted over HTTP.
//!
//! ## Features
//!
//! - **Severity gate**: events below the configured minimum are dropped locally
//! - **Session-scoped timers**: `start_timer`/`save_timer` per session, never shared
//! - **Best-effort delivery**: transport failures are counted, never raised
//! - **Explicit or global**: inject a [`Config`] handle, or use [`global`]
//!
//! ```
//! use logsfori::prelude::*;
//! use logsfori::transports::MemoryTransport;
//!
//! let emitter = Emitter::builder().transport(MemoryTransport::new()).build();
//! emitter.authenticate("my-token");
//! emitter.set_minimum_severity("warning")?;
//!
//! assert_eq!(emitter.info("cache", "warm")?, Dispatch::Filtered);
//! assert_eq!(emitter.error("db", "connection lost")?, Dispatch::Sent);
//!
//! emitter.start_timer("render");
//! let report = emitter.save_timer("render")?;
//! assert!(report.is_some());
//! # Ok::<(), LogsforiError>(())
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod transports;

pub mod prelude {
    pub use crate::core::{
        validate_severity, Config, Dispatch, Emitter, EmitterBuilder, EmitterMetrics,
        EventBuilder, Extra, LogEvent, LogsforiError, MemorySession, Result, SessionStore,
        Severity, TimerReport, Transport, DEFAULT_ENDPOINT,
    };
}

pub use crate::core::{
    validate_severity, Config, ConfigSnapshot, Dispatch, Emitter, EmitterBuilder,
    EmitterMetrics, EventBuilder, Extra, LogEvent, LogsforiError, MemorySession, Result,
    SessionStore, Severity, TimerReport, Transport, DEFAULT_ENDPOINT,
};
