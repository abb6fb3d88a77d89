//! Update metadata tool definition.
//!
//! The supplied map is merged by the backend; keys not present are left
//! untouched.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{
    document_id_property, required_object, required_str,
};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct UpdateMetadataTool {
    backend: Arc<dyn EcmBackend>,
}

impl UpdateMetadataTool {
    pub const NAME: &'static str = "ecm_update_metadata";

    pub const DESCRIPTION: &'static str = "Update metadata for a document";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        let metadata = required_object(args, "metadata")?;
        info!(
            "Update metadata tool called: '{}' ({} keys)",
            document_id,
            metadata.len()
        );

        let updated = self.backend.update_metadata(document_id, metadata).await?;
        Ok(Value::Object(updated))
    }
}

#[async_trait]
impl ToolHandler for UpdateMetadataTool {
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
                "metadata",
                SchemaBuilder::object()
                    .description("Metadata key-value pairs to update")
                    .required(true),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "metadata"]
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
    async fn test_forwards_metadata() {
        let backend = Arc::new(
            RecordingBackend::new().with_response("update_metadata", json!({"status": "final"})),
        );
        let tool = UpdateMetadataTool::new(backend.clone());

        let result = tool
            .execute(&args(json!({"documentId": "doc1", "metadata": {"status": "final"}})))
            .await;

        assert_eq!(result.data(), Some(&json!({"status": "final"})));
        assert_eq!(
            backend.calls(),
            vec![BackendCall::UpdateMetadata {
                document_id: "doc1".into(),
                metadata: args(json!({"status": "final"})),
            }]
        );
    }

    #[tokio::test]
    async fn test_empty_metadata_is_rejected() {
        let backend = Arc::new(RecordingBackend::new());
        let tool = UpdateMetadataTool::new(backend.clone());

        for arguments in [
            json!({"documentId": "doc1"}),
            json!({"documentId": "doc1", "metadata": {}}),
        ] {
            let result = tool.execute(&args(arguments)).await;
            assert_eq!(result.error(), Some("metadata is required"));
        }
        assert_eq!(backend.call_count(), 0);
    }

    #[tokio::test]
    async fn test_document_id_checked_first() {
        let backend = Arc::new(RecordingBackend::new());
        let tool = UpdateMetadataTool::new(backend.clone());

        let result = tool.execute(&args(json!({"metadata": {"k": 1}}))).await;

        assert_eq!(result.error(), Some("documentId is required"));
        assert_eq!(backend.call_count(), 0);
    }
}
