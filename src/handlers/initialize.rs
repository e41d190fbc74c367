use serde_json::{json, Value};

use crate::error::HandlerError;
use crate::manifest::SERVER_NAME;
use crate::protocol::MCP_PROTOCOL_VERSION;

/// `initialize`: protocol version, server identity and capabilities.
pub async fn initialize(_params: Value) -> Result<Value, HandlerError> {
    Ok(json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "capabilities": {
            "resources": { "list": true, "read": true },
            "tools": { "list": true, "call": true }
        }
    }))
}

/// `ping`: liveness check.
pub async fn ping(_params: Value) -> Result<Value, HandlerError> {
    Ok(Value::String("pong".into()))
}
