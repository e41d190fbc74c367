//! MCP server for the Recruitee recruiting API.
//!
//! Exposes offer and candidate operations as JSON-RPC 2.0 methods over an
//! HTTP transport (with a `/.well-known/mcp.json` discovery manifest) or a
//! newline-delimited stdio transport. Both transports share one dispatcher
//! and one read-only method registry.

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod protocol;
pub mod recruitee;
pub mod registry;
pub mod schema;
pub mod server;
pub mod transport;
