//! Transport layer for the MCP server.
//!
//! - **STDIO**: newline-delimited JSON-RPC on stdin/stdout (default) - feature: `stdio`
//! - **TCP**: newline-delimited JSON-RPC per connection - feature: `tcp`
//! - **HTTP**: JSON-RPC over POST plus REST helper routes - feature: `http`
//!
//! Every transport hands raw messages to [`McpServer`](crate::core::McpServer)
//! and writes back whatever envelope it returns.

mod config;
mod error;
mod service;

#[cfg(any(feature = "stdio", feature = "tcp"))]
mod lines;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, DEFAULT_TCP_PORT, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(any(feature = "stdio", feature = "tcp"))]
pub use lines::serve_lines;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
