use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::request::RpcId;

/// Standard JSON-RPC error codes, plus the server-range codes this crate uses.
pub mod error_codes {
    /// Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// The requested record, tool or resource does not exist.
    pub const RESOURCE_NOT_FOUND: i32 = -32001;
}

// ---------------------------------------------------------------------------
// JSON-RPC 2.0 response layer
// ---------------------------------------------------------------------------

/// JSON-RPC 2.0 response envelope.
///
/// Build through [`JsonRpcResponse::success`] or [`JsonRpcResponse::error`];
/// exactly one of `result` and `error` is ever populated. `id` is always
/// serialized and is `null` when the request id could not be recovered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<RpcId>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<RpcId>, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            result: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC 2.0 error object (protocol-level errors).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub fn parse_error() -> Self {
        Self { code: error_codes::PARSE_ERROR, message: "Parse error".into(), data: None }
    }

    pub fn invalid_request() -> Self {
        Self { code: error_codes::INVALID_REQUEST, message: "Invalid Request".into(), data: None }
    }

    pub fn invalid_request_with(detail: impl Into<String>) -> Self {
        Self::invalid_request().with_data(Value::String(detail.into()))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: error_codes::METHOD_NOT_FOUND,
            message: format!("Method not found: {method}"),
            data: None,
        }
    }

    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self { code: error_codes::INVALID_PARAMS, message: detail.into(), data: None }
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self { code: error_codes::INTERNAL_ERROR, message: detail.into(), data: None }
    }

    pub fn resource_not_found(detail: impl Into<String>) -> Self {
        Self { code: error_codes::RESOURCE_NOT_FOUND, message: detail.into(), data: None }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

// ---------------------------------------------------------------------------
// MCP content layer (returned inside a *successful* JSON-RPC response)
// ---------------------------------------------------------------------------

/// A single JSON content block, as returned by `call_tool` and `read_resource`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonContent {
    #[serde(rename = "type")]
    pub content_type: &'static str,
    pub data: Value,
}

impl JsonContent {
    pub fn new(data: Value) -> Self {
        Self {
            content_type: "application/json",
            data,
        }
    }
}

/// `call_tool` result wrapper.
pub fn tool_result(data: Value) -> Value {
    json!({ "content": [JsonContent::new(data)] })
}

/// `read_resource` result wrapper.
pub fn resource_contents(data: Value) -> Value {
    json!({ "contents": [JsonContent::new(data)] })
}
