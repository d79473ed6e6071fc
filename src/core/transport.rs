//! Transport trait for delivering payloads to the collector

use super::error::Result;

/// Delivers a JSON body to a collector URL.
///
/// Implementations report failures through `Err`; the emitter absorbs them.
/// The response body is never inspected and any HTTP status counts as delivered.
pub trait Transport: Send + Sync {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<()>;
    fn name(&self) -> &str;
}
