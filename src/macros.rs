//! Event macros with `format!`-style messages.
//!
//! Each macro expands to a push on the given emitter and evaluates to
//! `Result<Dispatch>`.
//!
//! # Examples
//!
//! ```
//! use logsfori::prelude::*;
//! use logsfori::transports::MemoryTransport;
//! use logsfori::info_event;
//!
//! let emitter = Emitter::builder().transport(MemoryTransport::new()).build();
//! emitter.authenticate("my-token");
//!
//! // Plain message
//! info_event!(emitter, "startup", "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info_event!(emitter, "startup", "Listening on port {}", port)?;
//! # Ok::<(), LogsforiError>(())
//! ```

/// Push an event at the given severity with a formatted message.
///
/// # Examples
///
/// ```
/// # use logsfori::prelude::*;
/// # let emitter = Emitter::builder().transport(logsfori::transports::MemoryTransport::new()).build();
/// # emitter.authenticate("tok");
/// use logsfori::push_event;
/// push_event!(emitter, Severity::Warning, "quota", "Usage at {}%", 91)?;
/// # Ok::<(), LogsforiError>(())
/// ```
#[macro_export]
macro_rules! push_event {
    ($emitter:expr, $level:expr, $event_name:expr, $($arg:tt)+) => {
        $emitter.event($event_name, format!($($arg)+)).level($level).push()
    };
}

/// Push a debug-level event.
#[macro_export]
macro_rules! debug_event {
    ($emitter:expr, $event_name:expr, $($arg:tt)+) => {
        $crate::push_event!($emitter, $crate::core::Severity::Debug, $event_name, $($arg)+)
    };
}

/// Push an info-level event.
#[macro_export]
macro_rules! info_event {
    ($emitter:expr, $event_name:expr, $($arg:tt)+) => {
        $crate::push_event!($emitter, $crate::core::Severity::Info, $event_name, $($arg)+)
    };
}

/// Push a warning-level event.
#[macro_export]
macro_rules! warning_event {
    ($emitter:expr, $event_name:expr, $($arg:tt)+) => {
        $crate::push_event!($emitter, $crate::core::Severity::Warning, $event_name, $($arg)+)
    };
}

/// Push an error-level event.
///
/// # Examples
///
/// ```
/// # use logsfori::prelude::*;
/// # let emitter = Emitter::builder().transport(logsfori::transports::MemoryTransport::new()).build();
/// # emitter.authenticate("tok");
/// use logsfori::error_event;
/// error_event!(emitter, "db", "Query failed with code {}", 1205)?;
/// # Ok::<(), LogsforiError>(())
/// ```
#[macro_export]
macro_rules! error_event {
    ($emitter:expr, $event_name:expr, $($arg:tt)+) => {
        $crate::push_event!($emitter, $crate::core::Severity::Error, $event_name, $($arg)+)
    };
}

/// Push a critical-level event.
#[macro_export]
macro_rules! critical_event {
    ($emitter:expr, $event_name:expr, $($arg:tt)+) => {
        $crate::push_event!($emitter, $crate::core::Severity::Critical, $event_name, $($arg)+)
    };
}
