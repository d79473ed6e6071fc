//! Core client types and traits

pub mod config;
pub mod emitter;
pub mod error;
pub mod event_builder;
pub mod extra;
pub mod metrics;
pub mod payload;
pub mod session;
pub mod severity;
pub mod timestamp;
pub mod transport;

pub use config::{Config, ConfigSnapshot, DEFAULT_ENDPOINT};
pub use emitter::{Dispatch, Emitter, EmitterBuilder};
pub use error::{LogsforiError, Result};
pub use event_builder::EventBuilder;
pub use extra::Extra;
pub use metrics::EmitterMetrics;
pub use payload::{LogEvent, TimerReport};
pub use session::{MemorySession, SessionStore};
pub use severity::{validate_severity, Severity};
pub use transport::Transport;
