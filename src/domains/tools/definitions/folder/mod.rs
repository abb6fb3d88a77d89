//! Folder tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod create;
pub mod list_contents;

pub use create::CreateFolderTool;
pub use list_contents::ListFolderContentsTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(CreateFolderTool::new(Arc::clone(backend))),
        Arc::new(ListFolderContentsTool::new(Arc::clone(backend))),
    ]
}
