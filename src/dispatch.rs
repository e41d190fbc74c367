//! Transport-agnostic JSON-RPC dispatch.
//!
//! Both transports hand raw bytes to [`Dispatcher::dispatch`] and write back
//! whatever bytes it returns. `None` means nothing must be written: the input
//! was a notification (or a batch made only of notifications).

use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use crate::registry::MethodRegistry;

/// Serialized when a response cannot be serialized.
const FALLBACK_RESPONSE: &[u8] =
    br#"{"jsonrpc":"2.0","id":null,"error":{"code":-32603,"message":"Internal error"}}"#;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<MethodRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<MethodRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &MethodRegistry {
        &self.registry
    }

    /// Decode, route and answer one JSON-RPC message (single or batch).
    pub async fn dispatch(&self, raw: &[u8]) -> Option<Vec<u8>> {
        let value: Value = match serde_json::from_slice(raw) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "parse error");
                let err = JsonRpcError::parse_error().with_data(Value::String(e.to_string()));
                return Some(encode(&JsonRpcResponse::error(None, err)));
            }
        };

        match value {
            Value::Array(items) => self.dispatch_batch(items).await.map(|r| encode(&r)),
            single => self.dispatch_value(single).await.map(|r| encode(&r)),
        }
    }

    /// Batch form: elements are dispatched one after another, in order.
    ///
    /// An empty batch is itself an invalid request. A batch of notifications
    /// produces no output.
    pub async fn dispatch_batch(&self, items: Vec<Value>) -> Option<Value> {
        if items.is_empty() {
            let resp = JsonRpcResponse::error(
                None,
                JsonRpcError::invalid_request_with("Batch must not be empty"),
            );
            return Some(to_value(&resp));
        }

        let mut responses = Vec::with_capacity(items.len());
        for item in items {
            if let Some(resp) = self.dispatch_value(item).await {
                responses.push(to_value(&resp));
            }
        }

        if responses.is_empty() {
            None
        } else {
            Some(Value::Array(responses))
        }
    }

    /// Validate an already-decoded value as a request and route it.
    pub async fn dispatch_value(&self, value: Value) -> Option<JsonRpcResponse> {
        match JsonRpcRequest::from_value(value) {
            Ok(req) => self.handle(&req).await,
            Err(invalid) => {
                warn!(reason = invalid.reason, "invalid request");
                Some(JsonRpcResponse::error(
                    invalid.id,
                    JsonRpcError::invalid_request_with(invalid.reason),
                ))
            }
        }
    }

    /// Route a validated request to its handler.
    ///
    /// Returns `None` for notifications whatever the outcome.
    pub async fn handle(&self, req: &JsonRpcRequest) -> Option<JsonRpcResponse> {
        debug!(method = %req.method, id = ?req.id, "dispatching request");

        let outcome = self.invoke(req).await;
        if req.is_notification() {
            if let Err(err) = &outcome {
                debug!(method = %req.method, code = err.code, "notification failed, suppressed");
            }
            return None;
        }

        Some(match outcome {
            Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
            Err(err) => JsonRpcResponse::error(req.id.clone(), err),
        })
    }

    async fn invoke(&self, req: &JsonRpcRequest) -> Result<Value, JsonRpcError> {
        let Some(method) = self.registry.lookup(&req.method) else {
            return Err(JsonRpcError::method_not_found(&req.method));
        };

        let Some(params) = req.structured_params() else {
            return Err(JsonRpcError::invalid_params("Params must be an object or an array"));
        };

        if let Err(errors) = method.validate_params(&params) {
            return Err(JsonRpcError::invalid_params("Invalid params")
                .with_data(json!({ "errors": errors })));
        }

        method.handler().call(params).await.map_err(|e| {
            warn!(method = %req.method, error = %e, "handler failed");
            JsonRpcError::from(e)
        })
    }
}

fn to_value(resp: &JsonRpcResponse) -> Value {
    serde_json::to_value(resp).unwrap_or_else(|e| {
        error!(error = %e, "failed to serialize response");
        serde_json::from_slice(FALLBACK_RESPONSE).unwrap_or(Value::Null)
    })
}

fn encode<T: Serialize>(payload: &T) -> Vec<u8> {
    serde_json::to_vec(payload).unwrap_or_else(|e| {
        error!(error = %e, "failed to serialize response");
        FALLBACK_RESPONSE.to_vec()
    })
}
