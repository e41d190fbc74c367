//! Error types for the transport layer.

use thiserror::Error;

/// Fatal transport failures. Bad input never ends up here; it is answered
/// with a JSON-RPC error envelope instead.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
    #[error("failed to read from input stream: {0}")]
    Read(#[source] std::io::Error),
    #[error("failed to write to output stream: {0}")]
    Write(#[source] std::io::Error),
}
