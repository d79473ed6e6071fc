//! Wire payloads posted to the collector

use super::extra::Extra;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// Collector path for discrete events
pub const PUSH_LOG_PATH: &str = "/push-log";

/// Collector path for timer reports
pub const TIMER_PATH: &str = "/timer";

/// Body of `POST {endpoint}/push-log`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    pub transaction_id: String,
    pub token: String,
    pub event_name: String,
    pub message: String,
    pub severity: Severity,
    /// Milliseconds since epoch
    pub created_at: i64,
    pub extra: Extra,
}

impl LogEvent {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Body of `POST {endpoint}/timer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerReport {
    pub func_name: String,
    pub token: String,
    /// Elapsed milliseconds, rounded to two decimals
    pub execution_time: f64,
    /// Milliseconds since epoch
    pub created_at: i64,
}

impl TimerReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
