#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use recruitee_mcp_server::config::RecruiteeConfig;
use recruitee_mcp_server::dispatch::Dispatcher;
use recruitee_mcp_server::error::HandlerError;
use recruitee_mcp_server::handlers;
use recruitee_mcp_server::recruitee::RecruiteeClient;
use recruitee_mcp_server::registry::{MethodRegistry, MethodSchema};
use serde_json::{json, Value};

/// Address nothing listens on; handlers that reach it fail with a
/// connection error.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

pub fn recruitee_config(base_url: &str) -> RecruiteeConfig {
    RecruiteeConfig {
        company_id: "acme".into(),
        api_token: Some("token-123".into()),
        base_url: base_url.into(),
        timeout: Duration::from_secs(5),
    }
}

pub fn client(base_url: &str) -> Arc<RecruiteeClient> {
    Arc::new(RecruiteeClient::new(&recruitee_config(base_url)).unwrap())
}

/// Dispatcher over the full production registry, talking to `base_url`.
pub fn app_dispatcher(base_url: &str) -> Dispatcher {
    let registry = handlers::build_registry(client(base_url)).unwrap();
    Dispatcher::new(Arc::new(registry))
}

/// Dispatcher over a small registry of synthetic methods.
///
/// The returned counter counts invocations of `count`.
pub fn test_dispatcher() -> (Dispatcher, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut registry = MethodRegistry::new();

    registry
        .register(
            "ping",
            |_params: Value| async { Ok::<_, HandlerError>(json!("pong")) },
            MethodSchema::new("Liveness check."),
        )
        .unwrap();

    registry
        .register(
            "echo",
            |params: Value| async move { Ok::<_, HandlerError>(params) },
            MethodSchema::new("Return params unchanged."),
        )
        .unwrap();

    registry
        .register(
            "null_result",
            |_params: Value| async { Ok::<_, HandlerError>(Value::Null) },
            MethodSchema::new("Succeed with a null result."),
        )
        .unwrap();

    registry
        .register(
            "greet",
            |params: Value| async move {
                let name = params["name"].as_str().unwrap_or_default().to_string();
                Ok::<_, HandlerError>(json!(format!("hello {name}")))
            },
            MethodSchema::new("Greet by name.").with_params(json!({
                "type": "object",
                "required": ["name"],
                "properties": { "name": { "type": "string" } }
            })),
        )
        .unwrap();

    registry
        .register(
            "reject",
            |_params: Value| async {
                Err::<Value, _>(HandlerError::invalid_params("'x' is required"))
            },
            MethodSchema::new("Always fails validation."),
        )
        .unwrap();

    registry
        .register(
            "missing",
            |_params: Value| async {
                Err::<Value, _>(HandlerError::not_found("no such record"))
            },
            MethodSchema::new("Always reports a missing record."),
        )
        .unwrap();

    registry
        .register(
            "upstream_down",
            |_params: Value| async {
                Err::<Value, _>(HandlerError::Upstream {
                    message: "Recruitee API request failed with status 502".into(),
                    status: Some(502),
                    detail: "API request to 'https://api.recruitee.com/c/acme/offers' \
                             failed with status=502."
                        .into(),
                })
            },
            MethodSchema::new("Always fails upstream."),
        )
        .unwrap();

    let counter = calls.clone();
    registry
        .register(
            "count",
            move |_params: Value| {
                let counter = counter.clone();
                async move {
                    let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
                    Ok::<_, HandlerError>(json!(n))
                }
            },
            MethodSchema::new("Count invocations."),
        )
        .unwrap();

    (Dispatcher::new(Arc::new(registry)), calls)
}

/// Dispatch a JSON value and decode the reply, if any.
pub async fn call(dispatcher: &Dispatcher, request: Value) -> Option<Value> {
    let raw = serde_json::to_vec(&request).unwrap();
    dispatcher
        .dispatch(&raw)
        .await
        .map(|out| serde_json::from_slice(&out).unwrap())
}

/// An `echo` request whose encoding is exactly `len` bytes long.
pub fn echo_request_of_len(len: usize) -> Vec<u8> {
    let head = br#"{"jsonrpc":"2.0","id":1,"method":"echo","params":[""#;
    let tail = br#""]}"#;
    let mut raw = Vec::with_capacity(len);
    raw.extend_from_slice(head);
    raw.resize(len - tail.len(), b'x');
    raw.extend_from_slice(tail);
    raw
}
