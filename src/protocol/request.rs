use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JSON-RPC 2.0 request id: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Str(String),
}

impl From<i64> for RpcId {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RpcId {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// JSON-RPC 2.0 request envelope.
///
/// `id: None` marks a notification.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RpcId>,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

/// Why a decoded JSON value was rejected as a request envelope.
///
/// Carries whatever `id` could be recovered so the error reply can echo it.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRequest {
    pub id: Option<RpcId>,
    pub reason: &'static str,
}

impl JsonRpcRequest {
    pub fn new(id: Option<RpcId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0".into(),
            id,
            method: method.into(),
            params,
        }
    }

    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// Validate a decoded JSON value as a request envelope.
    ///
    /// Done by hand rather than through `Deserialize` so that an absent `id`
    /// (notification) can be told apart from an explicit `null`, and so that
    /// the `id` survives when some other member is malformed.
    pub fn from_value(value: Value) -> Result<Self, InvalidRequest> {
        let Value::Object(mut obj) = value else {
            return Err(InvalidRequest {
                id: None,
                reason: "Request must be an object",
            });
        };

        let id = match obj.remove("id") {
            None => None,
            Some(Value::Number(n)) => Some(RpcId::Number(n)),
            Some(Value::String(s)) => Some(RpcId::Str(s)),
            Some(Value::Null) => {
                return Err(InvalidRequest {
                    id: None,
                    reason: "id must not be null",
                })
            }
            Some(_) => {
                return Err(InvalidRequest {
                    id: None,
                    reason: "id must be a string or a number",
                })
            }
        };

        if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
            return Err(InvalidRequest {
                id,
                reason: "jsonrpc must be '2.0'",
            });
        }

        let method = match obj.remove("method") {
            Some(Value::String(m)) if !m.is_empty() => m,
            _ => {
                return Err(InvalidRequest {
                    id,
                    reason: "Method must be a non-empty string",
                })
            }
        };

        Ok(Self {
            jsonrpc: "2.0".into(),
            id,
            method,
            params: obj.remove("params"),
        })
    }

    /// Params normalised for handlers: absent or `null` becomes `{}`.
    ///
    /// Returns `None` when params are present but neither object nor array.
    pub fn structured_params(&self) -> Option<Value> {
        match &self.params {
            None | Some(Value::Null) => Some(Value::Object(Map::new())),
            Some(v @ (Value::Object(_) | Value::Array(_))) => Some(v.clone()),
            Some(_) => None,
        }
    }
}

/// Parameters for `call_tool`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<Value>,
}

/// Parameters for `read_resource`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}
