//! Newline-delimited JSON-RPC over a byte stream (stdin/stdout in the binary).
//!
//! Strictly sequential: a message is fully dispatched, and its reply written
//! and flushed, before the next line is read.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, trace, warn};

use crate::dispatch::Dispatcher;
use crate::protocol::{JsonRpcError, JsonRpcResponse};

use super::{TransportError, MAX_MESSAGE_BYTES};

pub struct StdioTransport<R, W> {
    reader: BufReader<R>,
    writer: W,
    dispatcher: Dispatcher,
}

impl<R, W> StdioTransport<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(dispatcher: Dispatcher, reader: R, writer: W) -> Self {
        Self {
            reader: BufReader::new(reader),
            writer,
            dispatcher,
        }
    }

    /// Serve until the input reaches EOF.
    ///
    /// Malformed lines are answered with a parse error and the loop goes on;
    /// only stream I/O failures end it with an error.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("serving JSON-RPC on stdio");
        let mut raw = Vec::new();

        loop {
            raw.clear();
            let n = self
                .reader
                .read_until(b'\n', &mut raw)
                .await
                .map_err(TransportError::Read)?;
            if n == 0 {
                info!("input closed, shutting down");
                return Ok(());
            }

            let len = message_len(&raw);
            if len > MAX_MESSAGE_BYTES {
                warn!(bytes = len, limit = MAX_MESSAGE_BYTES, "message too large");
                self.write_parse_error("Message exceeds size limit").await?;
                continue;
            }

            let trimmed = match std::str::from_utf8(&raw) {
                Ok(s) => s.trim(),
                Err(_) => {
                    warn!("message is not valid UTF-8");
                    self.write_parse_error("Message is not valid UTF-8").await?;
                    continue;
                }
            };

            if trimmed.is_empty() {
                continue;
            }

            trace!(len = trimmed.len(), "read message");
            if let Some(out) = self.dispatcher.dispatch(trimmed.as_bytes()).await {
                self.write_line(&out).await?;
            }
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn write_parse_error(&mut self, detail: &str) -> Result<(), TransportError> {
        let resp = JsonRpcResponse::error(
            None,
            JsonRpcError::parse_error().with_data(detail.into()),
        );
        let out = serde_json::to_vec(&resp)
            .map_err(|e| TransportError::Write(std::io::Error::other(e)))?;
        self.write_line(&out).await
    }

    async fn write_line(&mut self, message: &[u8]) -> Result<(), TransportError> {
        trace!(len = message.len(), "writing message");
        self.writer
            .write_all(message)
            .await
            .map_err(TransportError::Write)?;
        self.writer
            .write_all(b"\n")
            .await
            .map_err(TransportError::Write)?;
        self.writer.flush().await.map_err(TransportError::Write)
    }
}

/// Length of a line without its `\n` or `\r\n` terminator.
fn message_len(line: &[u8]) -> usize {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line).len()
}
