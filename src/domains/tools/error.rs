//! Tool-specific error types.

use thiserror::Error;

use crate::core::backend::BackendError;

/// Errors that can occur during tool operations.
///
/// These never escape a tool: `ToolResult::from_outcome` converts them into
/// an error-shaped result at the tool boundary.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The ECM backend call failed.
    #[error("{0}")]
    Backend(#[from] BackendError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// A required argument is absent or blank.
    pub fn missing(field: &str) -> Self {
        Self::InvalidArguments(format!("{field} is required"))
    }

    /// An argument is present but has the wrong shape.
    pub fn wrong_type(field: &str, expected: &str) -> Self {
        Self::InvalidArguments(format!("{field} must be {expected}"))
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Short name of the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NotFound",
            Self::InvalidArguments(_) => "InvalidArguments",
            Self::Backend(_) => "BackendError",
            Self::Internal(_) => "Internal",
        }
    }

    /// Diagnostic string carried as `error_details` in a failed `ToolResult`.
    ///
    /// Backend failures report the HTTP status and response body; everything
    /// else reports the failure class.
    pub fn details(&self) -> String {
        match self {
            Self::Backend(e) => e.details(),
            other => other.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message() {
        let err = ToolError::missing("documentId");
        assert_eq!(err.to_string(), "documentId is required");
        assert_eq!(err.kind(), "InvalidArguments");
        assert_eq!(err.details(), "InvalidArguments");
    }

    #[test]
    fn test_backend_details_carry_status() {
        let err: ToolError = BackendError::status(404, "Failed to get document: x: Not Found").into();
        assert_eq!(err.to_string(), "Failed to get document: x: Not Found");
        assert_eq!(err.kind(), "BackendError");
        assert!(err.details().contains("404"));
    }
}
