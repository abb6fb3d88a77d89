//! Version tools.

use std::sync::Arc;

use crate::core::backend::EcmBackend;
use crate::domains::tools::ToolHandler;

pub mod list;

pub use list::GetVersionsTool;

pub fn tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    vec![Arc::new(GetVersionsTool::new(Arc::clone(backend)))]
}
