//! Search tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod advanced;
pub mod simple;

pub use advanced::AdvancedSearchTool;
pub use simple::SearchDocumentsTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(SearchDocumentsTool::new(Arc::clone(backend))),
        Arc::new(AdvancedSearchTool::new(Arc::clone(backend))),
    ]
}
