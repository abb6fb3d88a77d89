//! Workflow tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod start;
pub mod status;

pub use start::StartWorkflowTool;
pub use status::GetWorkflowStatusTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(StartWorkflowTool::new(Arc::clone(backend))),
        Arc::new(GetWorkflowStatusTool::new(Arc::clone(backend))),
    ]
}
