//! Errors raised by the ECM backend client.

use thiserror::Error;

/// Result alias for backend calls.
pub type BackendResult<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        body: Option<String>,
    },

    /// Connection, timeout or protocol failure before a response arrived.
    #[error("ECM API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Failed to decode ECM API response: {0}")]
    Decode(String),

    #[error("Invalid ECM API URL: {0}")]
    InvalidUrl(String),

    #[error("ECM client configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// Status failure without a response body.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
            body: None,
        }
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Diagnostic string surfaced to clients as `errorDetails`.
    pub fn details(&self) -> String {
        match self {
            Self::Status {
                status,
                body: Some(body),
                ..
            } if !body.trim().is_empty() => format!("HTTP {status}: {}", body.trim()),
            Self::Status { status, .. } => format!("HTTP {status}"),
            Self::Transport(e) if e.is_timeout() => "Timeout".to_string(),
            Self::Transport(e) if e.is_connect() => "ConnectionError".to_string(),
            Self::Transport(_) => "TransportError".to_string(),
            Self::Decode(_) => "DecodeError".to_string(),
            Self::InvalidUrl(_) => "InvalidUrl".to_string(),
            Self::Config(_) => "ConfigError".to_string(),
        }
    }

    /// Whether a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => super::retry::is_retryable_status(*status),
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
