//! Start workflow tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{
    document_id_property, optional_object, required_str,
};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct StartWorkflowTool {
    backend: Arc<dyn EcmBackend>,
}

impl StartWorkflowTool {
    pub const NAME: &'static str = "ecm_start_workflow";

    pub const DESCRIPTION: &'static str = "Start a workflow on a document";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        let workflow_name = required_str(args, "workflowName")?;
        let parameters = optional_object(args, "parameters")?;
        info!(
            "Start workflow tool called: '{}' on '{}'",
            workflow_name, document_id
        );

        let workflow = self
            .backend
            .start_workflow(document_id, workflow_name, parameters)
            .await?;
        info!(
            "Started workflow {} ({})",
            workflow["workflowId"], workflow["status"]
        );
        Ok(workflow)
    }
}

#[async_trait]
impl ToolHandler for StartWorkflowTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property("documentId", document_id_property())
            .property(
                "workflowName",
                SchemaBuilder::string()
                    .description("Name of the workflow to start")
                    .required(true),
            )
            .property(
                "parameters",
                SchemaBuilder::object().description("Workflow parameters (optional)"),
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
