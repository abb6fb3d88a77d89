//! The tool contract.
//!
//! Every tool exposed to MCP clients implements [`ToolHandler`]. The registry
//! and the protocol handler treat all tools uniformly through this trait.

use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use super::result::ToolResult;

/// Loosely-typed tool arguments as received on the wire.
pub type Arguments = Map<String, Value>;

/// Static description of a tool, as returned by `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
    pub tags: BTreeSet<String>,
}

/// Trait implemented by each tool.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Stable unique name used by clients to invoke the tool.
    fn name(&self) -> &str;

    /// Human/AI readable explanation of what the tool does.
    fn description(&self) -> &str;

    /// JSON schema describing the tool's arguments.
    fn input_schema(&self) -> Value;

    /// Category tags used for filtered listing.
    fn tags(&self) -> &[&str] {
        &[]
    }

    /// Execute the tool.
    ///
    /// Implementations must not panic or propagate errors: every failure is
    /// returned as an error-shaped `ToolResult`. Argument validation happens
    /// before any backend call.
    async fn execute(&self, arguments: &Arguments) -> ToolResult;

    fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
            tags: self.tags().iter().map(|t| t.to_string()).collect(),
        }
    }
}
