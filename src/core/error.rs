//! Error types for the logsfori client

pub type Result<T> = std::result::Result<T, LogsforiError>;

#[derive(Debug, thiserror::Error)]
pub enum LogsforiError {
    /// Emission attempted before `authenticate`
    #[error("Token is required. Please call authenticate() first.")]
    TokenRequired,

    /// Severity string outside the five known levels
    #[error("Invalid severity: '{value}'")]
    InvalidSeverity { value: String },

    /// HTTP/transport failure. Absorbed by the emitter, only transports return it.
    #[error("Transport error posting to '{url}': {message}")]
    Transport { url: String, message: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },
}

impl LogsforiError {
    /// Create an invalid severity error
    pub fn invalid_severity(value: impl Into<String>) -> Self {
        LogsforiError::InvalidSeverity {
            value: value.into(),
        }
    }

    /// Create a transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        LogsforiError::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LogsforiError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// True for precondition failures the caller is expected to fix
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            LogsforiError::TokenRequired | LogsforiError::InvalidSeverity { .. }
        )
    }
}
