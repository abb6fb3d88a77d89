//! Get document tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{document_id_property, required_str};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

/// Fetches one document's properties.
pub struct GetDocumentTool {
    backend: Arc<dyn EcmBackend>,
}

impl GetDocumentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "ecm_get_document";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a document by its ID";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        info!("Get document tool called: '{}'", document_id);

        Ok(self.backend.get_document(document_id).await?)
    }
}

#[async_trait]
impl ToolHandler for GetDocumentTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property("documentId", document_id_property())
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "document"]
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
    async fn test_returns_document_verbatim() {
        let backend = Arc::new(
            RecordingBackend::new()
                .with_response("get_document", json!({"id": "doc123", "title": "T"})),
        );
        let tool = GetDocumentTool::new(backend.clone());

        let result = tool.execute(&args(json!({"documentId": "doc123"}))).await;

        assert_eq!(result.data(), Some(&json!({"id": "doc123", "title": "T"})));
        assert_eq!(
            backend.calls(),
            vec![BackendCall::GetDocument("doc123".into())]
        );
    }

    #[tokio::test]
    async fn test_null_and_untyped_fields_survive() {
        let payload = json!({
            "id": "doc123",
            "title": null,
            "version": 2,
            "size": "12kb",
            "metadata": {"reviewed": null}
        });
        let backend =
            Arc::new(RecordingBackend::new().with_response("get_document", payload.clone()));
        let tool = GetDocumentTool::new(backend);

        let result = tool.execute(&args(json!({"documentId": "doc123"}))).await;

        assert!(result.is_success());
        assert_eq!(result.data(), Some(&payload));
    }

    #[tokio::test]
    async fn test_missing_document_id_skips_backend() {
        let backend = Arc::new(RecordingBackend::new());
        let tool = GetDocumentTool::new(backend.clone());

        let result = tool.execute(&args(json!({"documentId": ""}))).await;

        assert_eq!(result.error(), Some("documentId is required"));
        assert_eq!(backend.call_count(), 0);
    }

    #[test]
    fn test_schema_requires_document_id() {
        let tool = GetDocumentTool::new(Arc::new(RecordingBackend::new()));
        let schema = tool.input_schema();
        assert_eq!(schema["required"], json!(["documentId"]));
        assert_eq!(schema["properties"]["documentId"]["type"], "string");
    }
}
