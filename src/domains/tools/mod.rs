//! Tools domain module.
//!
//! Tools are the named operations MCP clients invoke through `tools/call`.
//! Each tool validates its own arguments and then delegates to the ECM
//! backend.
//!
//! ## Architecture
//!
//! - `handlers.rs` - The `ToolHandler` trait and tool descriptors
//! - `result.rs` - The uniform `ToolResult` outcome
//! - `schema.rs` - Fluent builder for input schemas
//! - `registry.rs` - Concurrent name-to-tool catalogue
//! - `router.rs` - The explicit, ordered list of built-in tools
//! - `definitions/` - Individual tool implementations, one file per tool
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a file in the matching `definitions/<group>/` directory
//! 2. Implement `ToolHandler` for the tool struct
//! 3. Add it to the group's `tools()` list

pub mod definitions;
mod error;
mod handlers;
mod registry;
mod result;
pub mod router;
mod schema;

pub use definitions::ToolGroup;
pub use error::ToolError;
pub use handlers::{Arguments, ToolDescriptor, ToolHandler};
pub use registry::ToolRegistry;
pub use result::{ToolFailure, ToolResult};
pub use router::{build_tool_registry, builtin_groups, builtin_tools};
pub use schema::{SchemaBuilder, SchemaNode};

#[cfg(test)]
pub(crate) use registry::tests::StaticTool;
