//! Error types and handling for the MCP server.
//!
//! This module defines the error type for start-up and serving failures: an
//! unusable ECM backend client, a transport that cannot run, or invalid
//! configuration.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// Tool failures never surface through this type; they are turned into
/// `ToolResult`s at the tool boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the ECM backend client.
    #[error("Backend error: {0}")]
    Backend(#[from] crate::core::backend::BackendError),

    /// Error originating from a transport.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
