//! Workflow status tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::required_str;
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct GetWorkflowStatusTool {
    backend: Arc<dyn EcmBackend>,
}

impl GetWorkflowStatusTool {
    pub const NAME: &'static str = "ecm_get_workflow_status";

    pub const DESCRIPTION: &'static str = "Get the status of a workflow instance";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let workflow_id = required_str(args, "workflowId")?;
        info!("Workflow status tool called: '{}'", workflow_id);

        Ok(self.backend.get_workflow_status(workflow_id).await?)
    }
}

#[async_trait]
impl ToolHandler for GetWorkflowStatusTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "workflowId",
                SchemaBuilder::string()
                    .description("The unique identifier of the workflow instance")
                    .required(true),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "workflow"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::testing::{BackendCall, RecordingBackend};
    use crate::domains::tools::definitions::test_support::args;
    use serde_json::json;

    #[tokio::test]
    async fn test_returns_workflow_with_steps() {
        let payload = json!({
            "workflowId": "wf1",
            "status": "IN_PROGRESS",
            "currentStep": "review",
            "steps": [{"stepId": "s1", "stepName": "review", "status": "PENDING"}]
        });
        let backend = Arc::new(
            RecordingBackend::new().with_response("get_workflow_status", payload.clone()),
        );
        let tool = GetWorkflowStatusTool::new(backend.clone());

        let result = tool.execute(&args(json!({"workflowId": "wf1"}))).await;

        assert_eq!(result.data(), Some(&payload));
        assert_eq!(
            backend.calls(),
            vec![BackendCall::GetWorkflowStatus("wf1".into())]
        );
    }

    #[tokio::test]
    async fn test_not_found_carries_status_details() {
        let backend = Arc::new(RecordingBackend::failing(
            404,
            "Failed to get workflow status: wf9: Not Found",
        ));
        let tool = GetWorkflowStatusTool::new(backend);

        let result = tool.execute(&args(json!({"workflowId": "wf9"}))).await;

        assert_eq!(
            result.error(),
            Some("Failed to get workflow status: wf9: Not Found")
        );
        assert_eq!(result.error_details(), Some("HTTP 404"));
    }
}
