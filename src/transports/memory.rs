//! In-memory transport that records requests instead of sending them

use crate::core::{LogsforiError, Result, Transport};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A request captured by [`MemoryTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// Decode the body as JSON
    pub fn json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_slice(&self.body)
    }
}

/// Records every request; clones share the same buffer.
///
/// Useful for tests and dry runs. `failing()` builds one that records the
/// request and then reports a transport error.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    fail: Arc<AtomicBool>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let transport = Self::new();
        transport.set_failing(true);
        transport
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::Relaxed);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }

    /// Requests whose URL ends with `path`
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .iter()
            .filter(|r| r.url.ends_with(path))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.requests.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.lock().is_empty()
    }

    pub fn clear(&self) {
        self.requests.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<()> {
        self.requests.lock().push(RecordedRequest {
            url: url.to_string(),
            body: body.to_vec(),
        });

        if self.fail.load(Ordering::Relaxed) {
            return Err(LogsforiError::transport(url, "simulated failure"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_requests() {
        let transport = MemoryTransport::new();
        transport
            .post_json("http://127.0.0.1:3000/push-log", br#"{"a":1}"#)
            .unwrap();
        transport
            .post_json("http://127.0.0.1:3000/timer", br#"{"b":2}"#)
            .unwrap();

        assert_eq!(transport.len(), 2);
        assert_eq!(transport.requests_to("/timer").len(), 1);
        assert_eq!(
            transport.requests()[0].json().unwrap(),
            serde_json::json!({"a": 1})
        );
    }

    #[test]
    fn test_clones_share_buffer() {
        let transport = MemoryTransport::new();
        let clone = transport.clone();
        clone.post_json("u", b"{}").unwrap();
        assert_eq!(transport.len(), 1);

        transport.clear();
        assert!(clone.is_empty());
    }

    #[test]
    fn test_failing_transport() {
        let transport = MemoryTransport::failing();
        let result = transport.post_json("u", b"{}");
        assert!(matches!(result, Err(LogsforiError::Transport { .. })));
        assert_eq!(transport.len(), 1);

        transport.set_failing(false);
        assert!(transport.post_json("u", b"{}").is_ok());
    }
}
