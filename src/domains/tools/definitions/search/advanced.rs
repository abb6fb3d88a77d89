//! Filtered document search tool definition.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::core::backend::{EcmBackend, SearchRequest};
use crate::domains::tools::definitions::common::{
    DEFAULT_MAX_RESULTS, optional_date, optional_max_results, optional_str, optional_string_list,
    required_str,
};
use crate::domains::tools::{Arguments, SchemaBuilder, ToolError, ToolHandler, ToolResult};

/// Text query narrowed by type, folder, tags and date range.
pub struct AdvancedSearchTool {
    backend: Arc<dyn EcmBackend>,
}

impl AdvancedSearchTool {
    pub const NAME: &'static str = "ecm_advanced_search";

    pub const DESCRIPTION: &'static str =
        "Perform advanced search with filters for document type, date range, folder, and tags";

    pub fn new(backend: Arc<dyn EcmBackend>) -> Self {
        Self { backend }
    }

    /// Narrow the arguments into a backend request.
    fn parse(args: &Arguments) -> Result<SearchRequest, ToolError> {
        let mut request = SearchRequest::new(required_str(args, "query")?, optional_max_results(args)?);
        request.folder_id = optional_str(args, "folderId")?.map(str::to_string);
        request.document_type = optional_str(args, "documentType")?.map(str::to_string);
        request.date_from = optional_date(args, "dateFrom")?;
        request.date_to = optional_date(args, "dateTo")?;
        request.tags = optional_string_list(args, "tags")?;

        if let (Some(from), Some(to)) = (request.date_from, request.date_to) {
            if from > to {
                return Err(ToolError::invalid_arguments(
                    "dateFrom must not be after dateTo",
                ));
            }
        }
        Ok(request)
    }

    #[instrument(skip_all)]
    async fn run(&self, args: &Arguments) -> Result<Value, ToolError> {
        let request = Self::parse(args)?;
        info!(
            "Advanced search tool called: '{}' (folder: {:?}, type: {:?})",
            request.query, request.folder_id, request.document_type
        );

        Ok(self.backend.search_documents(&request).await?)
    }
}

#[async_trait]
impl ToolHandler for AdvancedSearchTool {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        Self::DESCRIPTION
    }

    fn input_schema(&self) -> Value {
        let date = |text: &str| SchemaBuilder::string().format("date").description(text);

        SchemaBuilder::object()
            .property(
                "query",
                SchemaBuilder::string()
                    .description("Search query text")
                    .required(true),
            )
            .property(
                "documentType",
                SchemaBuilder::string().description("Filter by document type"),
            )
            .property(
                "folderId",
                SchemaBuilder::string().description("Restrict search to a folder"),
            )
            .property("dateFrom", date("Start date (ISO format: YYYY-MM-DD)"))
            .property("dateTo", date("End date (ISO format: YYYY-MM-DD)"))
            .property(
                "tags",
                SchemaBuilder::array()
                    .items(SchemaBuilder::string())
                    .description("Filter by tags"),
            )
            .property(
                "maxResults",
                SchemaBuilder::integer()
                    .description("Maximum number of results")
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
