//! Uniform outcome of a tool execution.
//!
//! A `ToolResult` holds either a data payload or an error message, never both
//! and never neither. The outcome is stored as an enum so the invariant holds
//! by construction; the wire shape (`success`, `data` | `error` +
//! `errorDetails`, `timestamp`, `durationMs`, `metadata`) is produced by the
//! `Serialize` impl.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::time::Duration;

use super::error::ToolError;

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Success(Value),
    Failure {
        error: String,
        details: Option<String>,
    },
}

/// Result of one tool execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolResult {
    outcome: Outcome,
    timestamp: DateTime<Utc>,
    duration_ms: Option<u64>,
    metadata: Option<Map<String, Value>>,
}

/// The failure half of a `ToolResult`, split out by [`ToolResult::into_outcome`].
#[derive(Debug, Clone, PartialEq)]
pub struct ToolFailure {
    pub error: String,
    pub details: Option<String>,
}

impl ToolResult {
    fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            timestamp: Utc::now(),
            duration_ms: None,
            metadata: None,
        }
    }

    /// Create a successful result carrying `data`.
    pub fn success(data: Value) -> Self {
        Self::new(Outcome::Success(data))
    }

    /// Create a failed result with a message and optional diagnostics.
    pub fn failure(error: impl Into<String>, details: Option<String>) -> Self {
        Self::new(Outcome::Failure {
            error: error.into(),
            details,
        })
    }

    /// Create a failed result from a tool error.
    pub fn from_error(err: &ToolError) -> Self {
        Self::failure(err.to_string(), Some(err.details()))
    }

    /// Convert the internal `Result` of a tool body into a `ToolResult`.
    pub fn from_outcome(outcome: Result<Value, ToolError>) -> Self {
        match outcome {
            Ok(data) => Self::success(data),
            Err(err) => Self::from_error(&err),
        }
    }

    /// Attach the measured wall-clock cost of the execution.
    pub fn with_duration(mut self, elapsed: Duration) -> Self {
        self.duration_ms = Some(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Attach side-channel metadata.
    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }

    pub fn data(&self) -> Option<&Value> {
        match &self.outcome {
            Outcome::Success(data) => Some(data),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn error_details(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success(_) => None,
            Outcome::Failure { details, .. } => details.as_deref(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }

    pub fn metadata(&self) -> Option<&Map<String, Value>> {
        self.metadata.as_ref()
    }

    /// Split into the payload or the failure.
    pub fn into_outcome(self) -> Result<Value, ToolFailure> {
        match self.outcome {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure { error, details } => Err(ToolFailure { error, details }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WireToolResult<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_details: Option<&'a str>,
    timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Map<String, Value>>,
}

impl Serialize for ToolResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireToolResult {
            success: self.is_success(),
            data: self.data(),
            error: self.error(),
            error_details: self.error_details(),
            timestamp: self.timestamp,
            duration_ms: self.duration_ms,
            metadata: self.metadata.as_ref(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_has_only_data() {
        let result = ToolResult::success(json!({"id": "doc1"}));
        assert!(result.is_success());
        assert_eq!(result.data(), Some(&json!({"id": "doc1"})));
        assert!(result.error().is_none());
        assert!(result.error_details().is_none());
    }

    #[test]
    fn test_failure_has_only_error() {
        let result = ToolResult::from_error(&ToolError::missing("documentId"));
        assert!(!result.is_success());
        assert!(result.data().is_none());
        assert_eq!(result.error(), Some("documentId is required"));
        assert_eq!(result.error_details(), Some("InvalidArguments"));
    }

    #[test]
    fn test_null_payload_still_counts_as_data() {
        let result = ToolResult::success(Value::Null);
        assert!(result.is_success());
        assert_eq!(result.data(), Some(&Value::Null));
        assert!(result.error().is_none());
    }

    #[test]
    fn test_wire_shape_for_success() {
        let result = ToolResult::success(json!([1, 2]))
            .with_duration(Duration::from_millis(42))
            .with_metadata(Map::from_iter([("source".to_string(), json!("ecm"))]));
        let wire = serde_json::to_value(&result).unwrap();

        assert_eq!(wire["success"], true);
        assert_eq!(wire["data"], json!([1, 2]));
        assert_eq!(wire["durationMs"], 42);
        assert_eq!(wire["metadata"]["source"], "ecm");
        assert!(wire.get("error").is_none());
        assert!(wire.get("errorDetails").is_none());
        assert!(wire["timestamp"].is_string());
    }

    #[test]
    fn test_wire_shape_for_failure() {
        let result = ToolResult::failure("boom", Some("Internal".to_string()));
        let wire = serde_json::to_value(&result).unwrap();

        assert_eq!(wire["success"], false);
        assert_eq!(wire["error"], "boom");
        assert_eq!(wire["errorDetails"], "Internal");
        assert!(wire.get("data").is_none());
        assert!(wire.get("durationMs").is_none());
    }

    #[test]
    fn test_into_outcome() {
        let ok = ToolResult::success(json!(1)).into_outcome();
        assert_eq!(ok, Ok(json!(1)));

        let err = ToolResult::failure("nope", None).into_outcome().unwrap_err();
        assert_eq!(err.error, "nope");
        assert!(err.details.is_none());
    }
}
