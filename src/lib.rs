//! ECM MCP Server Library
//!
//! A Model Context Protocol gateway in front of an Enterprise Content
//! Management REST API. MCP clients discover ECM operations as tools over
//! JSON-RPC 2.0 and invoke them; each call is validated, forwarded to the
//! ECM backend and answered with a uniform result envelope.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the ECM backend client, the
//!   JSON-RPC protocol handler, the server facade and its transports
//! - **domains**
//!   - **tools**: the tool contract, registry, schema builder and the
//!     built-in ECM tool definitions
//!
//! # Example
//!
//! ```rust,no_run
//! use ecm_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
