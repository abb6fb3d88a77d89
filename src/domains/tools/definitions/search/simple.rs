//! Full-text document search tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::{EcmBackend, SearchRequest};
use crate::domains::tools::definitions::common::{
    DEFAULT_MAX_RESULTS, optional_max_results, required_str,
};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

/// Text query over all documents.
pub struct SearchDocumentsTool {
    backend: Arc<dyn EcmBackend>,
}

impl SearchDocumentsTool {
    pub const NAME: &'static str = "ecm_search_documents";

    pub const DESCRIPTION: &'static str = "Search for documents using a text query";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let query = required_str(args, "query")?;
        let max_results = optional_max_results(args)?;
        info!("Search tool called: '{}' (max {})", query, max_results);

        let result = self
            .backend
            .search_documents(&SearchRequest::new(query, max_results))
            .await?;
        let returned = result["documents"].as_array().map_or(0, Vec::len);
        info!("Search '{}' returned {} documents", query, returned);
        Ok(result)
    }
}

#[async_trait]
impl ToolHandler for SearchDocumentsTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        SchemaBuilder::object()
            .property(
                "query",
                SchemaBuilder::string()
                    .description("Search query text")
                    .required(true),
            )
            .property(
                "maxResults",
                SchemaBuilder::integer()
                    .description("Maximum number of results to return")
                    .minimum(1)
                    .default_value(DEFAULT_MAX_RESULTS),
            )
            .build()
    }

    fn tags(&self) -> &[&str] {
        &["ecm", "search"]
    }

    async fn execute(&self, arguments: &Arguments) -> ToolResult {
        ToolResult::from_outcome(self.run(arguments).await)
    }
}
