//! HTTP router tests, driven in-process with `tower::ServiceExt::oneshot`.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use recruitee_mcp_server::dispatch::Dispatcher;
use recruitee_mcp_server::transport::{build_router, AppState, HttpServer, MAX_MESSAGE_BYTES};
use serde_json::Value;
use tower::ServiceExt;

use common::{app_dispatcher, echo_request_of_len, test_dispatcher, UNREACHABLE_BASE_URL};

fn router(dispatcher: Dispatcher) -> Router {
    build_router(AppState {
        dispatcher: Arc::new(dispatcher),
    })
}

fn post_rpc(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

async fn body_json(response: axum::response::Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

#[tokio::test]
async fn ping_returns_200_with_result() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher)
        .oneshot(post_rpc(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(
        body_bytes(response).await,
        br#"{"jsonrpc":"2.0","id":1,"result":"pong"}"#
    );
}

#[tokio::test]
async fn json_rpc_errors_use_http_200() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher)
        .oneshot(post_rpc(r#"{"jsonrpc":"2.0","id":2,"method":"doesNotExist"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32601);
    assert_eq!(json["id"], 2);
}

#[tokio::test]
async fn malformed_json_is_parse_error_in_body() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher)
        .oneshot(post_rpc("{ definitely not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32700);
    assert!(json["id"].is_null());
}

#[tokio::test]
async fn notification_returns_204_without_body() {
    let (dispatcher, calls) = test_dispatcher();
    let response = router(dispatcher)
        .oneshot(post_rpc(r#"{"jsonrpc":"2.0","method":"count"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn batch_is_answered_as_array() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher)
        .oneshot(post_rpc(
            r#"[{"jsonrpc":"2.0","id":1,"method":"ping"},{"jsonrpc":"2.0","method":"ping"}]"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 1);
}

#[tokio::test]
async fn oversize_body_is_rejected_with_400() {
    let (dispatcher, calls) = test_dispatcher();
    let body = vec![b' '; MAX_MESSAGE_BYTES + 1];
    let response = router(dispatcher).oneshot(post_rpc(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], -32700);
    assert!(json["id"].is_null());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn body_of_exactly_the_limit_is_dispatched() {
    let (dispatcher, _) = test_dispatcher();
    let body = echo_request_of_len(MAX_MESSAGE_BYTES);
    let response = router(dispatcher).oneshot(post_rpc(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], 1);
    assert!(json.get("result").is_some());
}

#[tokio::test]
async fn get_on_rpc_endpoint_is_405() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher).oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher).oneshot(get("/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_reports_ok() {
    let (dispatcher, _) = test_dispatcher();
    let response = router(dispatcher).oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn manifest_lists_exactly_the_registered_methods() {
    let dispatcher = app_dispatcher(UNREACHABLE_BASE_URL);
    let expected: Vec<String> = dispatcher
        .registry()
        .names()
        .into_iter()
        .map(String::from)
        .collect();

    let response = router(dispatcher)
        .oneshot(get("/.well-known/mcp.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let manifest = body_json(response).await;
    assert_eq!(manifest["name"], "recruitee-mcp");
    assert_eq!(manifest["protocol"], "json-rpc-2.0");
    assert_eq!(manifest["endpoint"], "/");

    let listed: Vec<String> = manifest["methods"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, expected);

    for name in [
        "initialize",
        "ping",
        "list_resources",
        "read_resource",
        "list_tools",
        "call_tool",
        "search_offers",
        "get_offer",
        "search_candidates",
        "get_candidate",
        "create_candidate",
    ] {
        assert!(listed.iter().any(|l| l == name), "manifest lacks {name}");
    }
}

#[tokio::test]
async fn manifest_is_byte_stable() {
    let dispatcher = Arc::new(app_dispatcher(UNREACHABLE_BASE_URL));
    let app = build_router(AppState { dispatcher });

    let first = body_bytes(app.clone().oneshot(get("/.well-known/mcp.json")).await.unwrap()).await;
    let second = body_bytes(app.oneshot(get("/.well-known/mcp.json")).await.unwrap()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn bind_failure_is_reported() {
    let (dispatcher, _) = test_dispatcher();
    let server = HttpServer::new(Arc::new(dispatcher), "definitely-not-an-address");
    let err = server.bind().await.unwrap_err();
    assert!(err.to_string().contains("definitely-not-an-address"));
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let (dispatcher, _) = test_dispatcher();
    let server = HttpServer::new(Arc::new(dispatcher), "127.0.0.1:0");
    let listener = server.bind().await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server.serve(listener, async move {
        let _ = stop_rx.await;
    }));

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/"))
        .header("content-type", "application/json")
        .body(r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let json: Value = response.json().await.unwrap();
    assert_eq!(json["result"], "pong");

    stop_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
