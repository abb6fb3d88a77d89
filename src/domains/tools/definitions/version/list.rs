//! Version history tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::EcmBackend;
use crate::domains::tools::definitions::common::{document_id_property, required_str};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

pub struct GetVersionsTool {
    backend: Arc<dyn EcmBackend>,
}

impl GetVersionsTool {
    pub const NAME: &'static str = "ecm_get_versions";

    pub const DESCRIPTION: &'static str = "Get version history for a document";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let document_id = required_str(args, "documentId")?;
        info!("Get versions tool called: '{}'", document_id);

        let versions = self.backend.get_versions(document_id).await?;
        if let Some(list) = versions.as_array() {
            info!("Document '{}' has {} versions", document_id, list.len());
        }
        Ok(versions)
    }
}

#[async_trait]
impl ToolHandler for GetVersionsTool {
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
        &["ecm", "version"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}
