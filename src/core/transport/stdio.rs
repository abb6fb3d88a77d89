//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default mode. Stdout
//! carries only JSON-RPC responses; logs go to stderr.

use tokio::io::{BufReader, stdin, stdout};
use tracing::info;

use super::TransportResult;
use super::lines::serve_lines;
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run until stdin is closed.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let handled = serve_lines(&server, BufReader::new(stdin()), stdout(), "stdio").await?;

        info!("STDIO transport finished after {} messages", handled);
        Ok(())
    }
}
