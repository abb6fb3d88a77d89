//! Local diagnostic tools. These never call the backend.

use std::sync::Arc;

use crate::domains::tools::ToolHandler;

pub mod check_auth;

pub use check_auth::CheckAuthenticationTool;

pub fn tools() -> Vec<Arc<dyn ToolHandler>> {
    vec![Arc::new(CheckAuthenticationTool)]
}
