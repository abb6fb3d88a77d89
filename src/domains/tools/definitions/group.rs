//! Bundles of related tools sharing one backend.

use std::sync::Arc;

use crate::domains::tools::{Arguments, ToolDescriptor, ToolError, ToolHandler, ToolResult};

/// A named set of tools, e.g. the document or workflow tools.
///
/// Groups only organize registration; clients always reach a tool through
/// the registry by its exact name.
#[derive(Clone)]
pub struct ToolGroup {
    name: &'static str,
    tools: Vec<Arc<dyn ToolHandler>>,
}

impl ToolGroup {
    pub fn new(name: &'static str, tools: Vec<Arc<dyn ToolHandler>>) -> Self {
        Self { name, tools }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn list_definitions(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Run the operation named exactly `operation`.
    pub async fn execute(
        &self,
        operation: &str,
        arguments: &Arguments,
    ) -> Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|tool| tool.name() == operation)
            .ok_or_else(|| ToolError::not_found(operation))?;
        Ok(tool.execute(arguments).await)
    }

    pub fn into_tools(self) -> Vec<Arc<dyn ToolHandler>> {
        self.tools
    }
}
