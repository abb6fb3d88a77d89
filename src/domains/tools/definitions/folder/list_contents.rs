//! List folder contents tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{optional_bool, required_str};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct ListFolderContentsTool {
    backend: Arc<dyn EcmBackend>,
}

impl ListFolderContentsTool {
    pub const NAME: &'static str = "ecm_list_folder_contents";

    pub const DESCRIPTION: &'static str =
        "List the contents of a folder including documents and subfolders";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let folder_id = required_str(args, "folderId")?;
        let include_documents = optional_bool(args, "includeDocuments", true)?;
        let include_subfolders = optional_bool(args, "includeSubfolders", true)?;
        info!(
            "List folder tool called: '{}' (documents: {}, subfolders: {})",
            folder_id, include_documents, include_subfolders
        );

        Ok(self
            .backend
            .get_folder_contents(folder_id, include_documents, include_subfolders)
            .await?)
    }
}

#[async_trait]
impl ToolHandler for ListFolderContentsTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "folderId",
                SchemaBuilder::string()
                    .description("The unique identifier of the folder")
                    .required(true),
            )
            .property(
                "includeDocuments",
                SchemaBuilder::boolean()
                    .description("Include documents in the listing")
                    .default_value(true),
            )
            .property(
                "includeSubfolders",
                SchemaBuilder::boolean()
                    .description("Include subfolders in the listing")
                    .default_value(true),
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
