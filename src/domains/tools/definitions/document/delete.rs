//! Delete document tool definition.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{document_id_property, required_str, to_payload};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

// ============================================================================
// Output Structure
// ============================================================================

/// Confirmation returned after a successful delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteConfirmation<'a> {
    success: bool,
    message: &'static str,
    document_id: &'a str,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Deletes a document.
pub struct DeleteDocumentTool {
    backend: Arc<dyn EcmBackend>,
}

impl DeleteDocumentTool {
    pub const NAME: &'static str = "ecm_delete_document";

    pub const DESCRIPTION: &'static str = "Delete a document from the ECM system";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        info!("Delete document tool called: '{}'", document_id);

        self.backend.delete_document(document_id).await?;
        info!("Deleted document '{}'", document_id);

        to_payload(&DeleteConfirmation {
            success: true,
            message: "Document deleted successfully",
            document_id,
        })
    }
}

#[async_trait]
impl ToolHandler for DeleteDocumentTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "documentId",
                document_id_property().description("The unique identifier of the document to delete"),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "document"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}
