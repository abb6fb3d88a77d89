//! Tool definitions module.
//!
//! One file per tool, grouped by the ECM area it touches. Each group exposes
//! `tools()` returning its tools in registration order.

pub mod common;
pub mod diagnostics;
pub mod document;
pub mod folder;
mod group;
pub mod metadata;
pub mod search;
pub mod version;
pub mod workflow;

pub use diagnostics::CheckAuthenticationTool;
pub use document::{DeleteDocumentTool, GetDocumentTool};
pub use folder::{CreateFolderTool, ListFolderContentsTool};
pub use group::ToolGroup;
pub use metadata::{GetMetadataTool, UpdateMetadataTool};
pub use search::{AdvancedSearchTool, SearchDocumentsTool};
pub use version::GetVersionsTool;
pub use workflow::{GetWorkflowStatusTool, StartWorkflowTool};

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::Value;

    use crate::domains::tools::Arguments;

    /// Unwrap a `json!` object literal into tool arguments.
    pub fn args(value: Value) -> Arguments {
        match value {
            Value::Object(map) => map,
            other => panic!("tool arguments must be an object, got {other}"),
        }
    }
}
