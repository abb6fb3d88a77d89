//! Core infrastructure: configuration, errors, the ECM backend client, the
//! JSON-RPC protocol layer, the server facade and its transports.

pub mod backend;
pub mod config;
pub mod error;
pub mod protocol;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
