//! Get metadata tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{document_id_property, required_str};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct GetMetadataTool {
    backend: Arc<dyn EcmBackend>,
}

impl GetMetadataTool {
    pub const NAME: &'static str = "ecm_get_metadata";

    pub const DESCRIPTION: &'static str = "Get metadata for a document";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        info!("Get metadata tool called: '{}'", document_id);

        let metadata = self.backend.get_metadata(document_id).await?;
        Ok(Value::Object(metadata))
    }
}

#[async_trait]
impl ToolHandler for GetMetadataTool {
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
        &["ecm", "metadata"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}
