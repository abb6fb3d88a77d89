//! Built-in tool list.
//!
//! Registration is an explicit ordered list so the registry's contents are
//! auditable. Every tool that is built here is what `tools/list` reports.

use std::sync::Arc;

use tracing::info;

use crate::core::backend::EcmBackend;

use super::definitions::{
    ToolGroup, diagnostics, document, folder, metadata, search, version, workflow,
};
use super::handlers::ToolHandler;
use super::registry::ToolRegistry;

/// The built-in tool groups, in registration order.
pub fn builtin_groups(backend: &Arc<dyn EcmBackend>) -> Vec<ToolGroup> {
    vec![
        ToolGroup::new("document", document::tools(backend)),
        ToolGroup::new("search", search::tools(backend)),
        ToolGroup::new("folder", folder::tools(backend)),
        ToolGroup::new("metadata", metadata::tools(backend)),
        ToolGroup::new("version", version::tools(backend)),
        ToolGroup::new("workflow", workflow::tools(backend)),
        ToolGroup::new("diagnostics", diagnostics::tools()),
    ]
}

/// All built-in tools, in registration order.
pub fn builtin_tools(backend: &Arc<dyn EcmBackend>) -> Vec<Arc<dyn ToolHandler>> {
    builtin_groups(backend)
        .into_iter()
        .flat_map(ToolGroup::into_tools)
        .collect()
}

/// Build a registry holding every built-in tool.
pub fn build_tool_registry(backend: &Arc<dyn EcmBackend>) -> ToolRegistry {
    let registry = ToolRegistry::new();
    registry.register_all(builtin_tools(backend));
    info!("Tool registry ready with {} tools", registry.count());
    registry
}
