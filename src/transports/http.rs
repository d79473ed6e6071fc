//! HTTP transport for the LogsForI collector
//!
//! Posts each payload synchronously over HTTP. Non-2xx statuses are not
//! treated as errors since the collector's response is never inspected.

use crate::core::{LogsforiError, Result, Transport};
use std::time::Duration;
use ureq::Agent;

/// Default upper bound on a single request, connect included
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Blocking HTTP transport backed by a `ureq` agent
///
/// # Example
///
/// ```no_run
/// use logsfori::prelude::*;
/// use logsfori::transports::HttpTransport;
/// use std::time::Duration;
///
/// let emitter = Emitter::builder()
///     .transport(HttpTransport::with_timeout(Duration::from_secs(2)))
///     .build();
/// emitter.config().authenticate("my-token");
/// emitter.push_event("signup", "user registered", "info").unwrap();
/// ```
pub struct HttpTransport {
    agent: Agent,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<()> {
        self.agent
            .post(url)
            .header("Content-Type", "application/json")
            .send(body)
            .map(|_| ())
            .map_err(|e| LogsforiError::transport(url, e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_default_timeout() {
        let transport = HttpTransport::new();
        assert_eq!(transport.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(transport.name(), "http");
    }

    #[test]
    fn test_connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let transport = HttpTransport::with_timeout(Duration::from_secs(1));
        let url = format!("http://127.0.0.1:{}/push-log", port);
        let err = transport.post_json(&url, b"{}").unwrap_err();

        match err {
            LogsforiError::Transport { url: failed, .. } => assert_eq!(failed, url),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_is_transport_error() {
        let transport = HttpTransport::new();
        let result = transport.post_json("not a url/push-log", b"{}");
        assert!(matches!(result, Err(LogsforiError::Transport { .. })));
    }
}
