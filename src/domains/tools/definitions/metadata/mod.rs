//! Metadata tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod get;
pub mod update;

pub use get::GetMetadataTool;
pub use update::UpdateMetadataTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![
        Arc::new(GetMetadataTool::new(Arc::clone(backend))),
        Arc::new(UpdateMetadataTool::new(Arc::clone(backend))),
    ]
}
