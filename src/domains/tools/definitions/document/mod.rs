//! Document tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod delete;
pub mod get;

pub use delete::DeleteDocumentTool;
pub use get::GetDocumentTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(GetDocumentTool::new(Arc::clone(backend))),
        Arc::new(DeleteDocumentTool::new(Arc::clone(backend))),
    ]
}
