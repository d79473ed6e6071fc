//! Shared client configuration
//!
//! `Config` is a cheap, cloneable handle: every clone observes the same
//! token, endpoint and minimum severity. Writes are last-write-wins.

use super::error::{LogsforiError, Result};
use super::severity::{validate_severity, Severity};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// Collector address used when `authenticate` is given only a token
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000";

pub const ENV_TOKEN: &str = "LOGSFORI_TOKEN";
pub const ENV_ENDPOINT: &str = "LOGSFORI_ENDPOINT";
pub const ENV_MIN_SEVERITY: &str = "LOGSFORI_MIN_SEVERITY";

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Point-in-time copy of the configuration, read once per emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    pub token: Option<String>,
    pub endpoint: String,
    pub minimum_severity: Severity,
}

impl ConfigSnapshot {
    /// The token, if one was set and is non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Join a collector path onto the endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }
}

impl Default for ConfigSnapshot {
    fn default() -> Self {
        Self {
            token: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            minimum_severity: Severity::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    state: Arc<RwLock<ConfigSnapshot>>,
}

impl Config {
    /// Unauthenticated configuration with the default endpoint and `info` threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide shared instance
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::new)
    }

    /// Build a configuration from `LOGSFORI_TOKEN`, `LOGSFORI_ENDPOINT` and
    /// `LOGSFORI_MIN_SEVERITY`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if `LOGSFORI_MIN_SEVERITY` is not a known level.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Config::new();

        if let Some(token) = lookup(ENV_TOKEN) {
            let endpoint = lookup(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
            config.authenticate_with_endpoint(token, endpoint);
        } else if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.state.write().endpoint = endpoint;
        }

        if let Some(raw) = lookup(ENV_MIN_SEVERITY) {
            let level = validate_severity(&raw)
                .map_err(|e| LogsforiError::config(ENV_MIN_SEVERITY, e.to_string()))?;
            config.set_minimum_level(level);
        }

        Ok(config)
    }

    /// Set the token and reset the endpoint to [`DEFAULT_ENDPOINT`]
    pub fn authenticate(&self, token: impl Into<String>) {
        self.authenticate_with_endpoint(token, DEFAULT_ENDPOINT);
    }

    /// Set the token and endpoint, overwriting any previous values
    pub fn authenticate_with_endpoint(&self, token: impl Into<String>, endpoint: impl Into<String>) {
        let mut state = self.state.write();
        state.token = Some(token.into());
        state.endpoint = endpoint.into();
    }

    /// Set the threshold from its wire name
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeverity` and leaves the threshold untouched if
    /// `severity` is not one of the five levels.
    pub fn set_minimum_severity(&self, severity: &str) -> Result<()> {
        let level = validate_severity(severity)?;
        self.set_minimum_level(level);
        Ok(())
    }

    pub fn set_minimum_level(&self, level: Severity) {
        self.state.write().minimum_severity = level;
    }

    pub fn minimum_severity(&self) -> Severity {
        self.state.read().minimum_severity
    }

    pub fn endpoint(&self) -> String {
        self.state.read().endpoint.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().token().is_some()
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        self.state.read().clone()
    }

    /// Whether two handles share the same underlying state
    pub fn ptr_eq(&self, other: &Config) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}
