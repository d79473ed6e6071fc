//! Console transport for local development
//!
//! Prints each request to stderr instead of sending it. Event lines are
//! colored by severity.

use crate::core::{Result, Severity, Transport};
use chrono::Utc;
use colored::Colorize;

pub struct ConsoleTransport {
    use_colors: bool,
}

impl ConsoleTransport {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_line(&self, url: &str, body: &[u8]) -> String {
        let body_str = String::from_utf8_lossy(body);
        let severity = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("severity").and_then(|s| s.as_str()).map(String::from))
            .and_then(|s| s.parse::<Severity>().ok());

        let tag = match severity {
            Some(level) => format!("{:8}", level.as_str()),
            None => format!("{:8}", "timer"),
        };
        let tag = match (self.use_colors, severity) {
            (true, Some(level)) => tag.color(level.color_code()).to_string(),
            (true, None) => tag.cyan().to_string(),
            (false, _) => tag,
        };

        format!(
            "[{}] [{}] POST {} {}",
            Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            tag,
            url,
            body_str
        )
    }
}

impl Default for ConsoleTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ConsoleTransport {
    fn post_json(&self, url: &str, body: &[u8]) -> Result<()> {
        eprintln!("{}", self.format_line(url, body));
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
