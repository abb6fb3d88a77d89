//! Create folder tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{optional_str, required_str};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct CreateFolderTool {
    backend: Arc<dyn EcmBackend>,
}

impl CreateFolderTool {
    pub const NAME: &'static str = "ecm_create_folder";

    pub const DESCRIPTION: &'static str = "Create a new folder in the ECM system";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let name = required_str(args, "name")?;
        let parent_id = optional_str(args, "parentId")?;
        let description = optional_str(args, "description")?;
        info!("Create folder tool called: '{}' (parent: {:?})", name, parent_id);

        Ok(self
            .backend
            .create_folder(name, parent_id, description)
            .await?)
    }
}

#[async_trait]
impl ToolHandler for CreateFolderTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "name",
                SchemaBuilder::string()
                    .description("Name of the folder")
                    .required(true),
            )
            .property(
                "parentId",
                SchemaBuilder::string().description("ID of the parent folder (optional)"),
            )
            .property(
                "description",
                SchemaBuilder::string().description("Folder description (optional)"),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "folder"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}
