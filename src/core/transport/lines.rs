//! Newline-delimited JSON-RPC framing shared by stdio and TCP.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

use super::TransportResult;
use crate::core::McpServer;

/// Serve requests read line by line from `reader` until EOF.
///
/// Blank lines are skipped. Every request that is due a response gets
/// exactly one JSON line on `writer`, flushed immediately.
#[instrument(skip_all, fields(peer = peer))]
pub async fn serve_lines<R, W>(
    server: &McpServer,
    reader: R,
    mut writer: W,
    peer: &str,
) -> TransportResult<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    let mut handled = 0;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        handled += 1;

        let Some(response) = server.handle_message(line).await else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    debug!("Input closed after {} messages", handled);
    Ok(handled)
}
