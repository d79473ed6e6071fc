//! Transport implementations

pub mod memory;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "console")]
pub mod console;

pub use memory::{MemoryTransport, RecordedRequest};

#[cfg(feature = "http")]
pub use http::HttpTransport;

#[cfg(feature = "console")]
pub use console::ConsoleTransport;

pub use crate::core::Transport;
