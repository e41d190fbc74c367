//! Transport adapters. Both are thin I/O shells around [`crate::dispatch::Dispatcher`].

mod error;
pub mod http;
pub mod stdio;

pub use error::TransportError;
pub use http::{build_router, AppState, HttpServer};
pub use stdio::StdioTransport;

/// Maximum bytes per JSON-RPC message (1 MiB), on either transport.
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;
