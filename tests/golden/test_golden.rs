//! Golden transcripts: fixed request bytes in, fixed response bytes out.
//!
//! Envelopes whose member order is fixed by the response types are compared
//! byte for byte; payloads built from JSON objects are compared as values.

#[path = "../common/mod.rs"]
mod common;

use recruitee_mcp_server::dispatch::Dispatcher;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{app_dispatcher, UNREACHABLE_BASE_URL};

async fn exchange(dispatcher: &Dispatcher, request: &str) -> String {
    let out = dispatcher
        .dispatch(request.as_bytes())
        .await
        .expect("golden requests all carry an id");
    String::from_utf8(out).unwrap()
}

/// (request, expected response) pairs that never reach the upstream API.
const OFFLINE_TRANSCRIPT: &[(&str, &str)] = &[
    (
        r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#,
        r#"{"jsonrpc":"2.0","id":1,"result":"pong"}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":2,"method":"doesNotExist"}"#,
        r#"{"jsonrpc":"2.0","id":2,"error":{"code":-32601,"message":"Method not found: doesNotExist"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":3,"method":"call_tool","params":{"name":"fire_everyone"}}"#,
        r#"{"jsonrpc":"2.0","id":3,"error":{"code":-32001,"message":"Unknown tool: fire_everyone"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":"c","method":"call_tool","params":{"name":"create_candidate","arguments":{}}}"#,
        r#"{"jsonrpc":"2.0","id":"c","error":{"code":-32602,"message":"Missing required fields: first_name, last_name, email"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":4,"method":"read_resource","params":{"uri":"recruitee://jobs"}}"#,
        r#"{"jsonrpc":"2.0","id":4,"error":{"code":-32001,"message":"Unsupported resource URI: recruitee://jobs"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":5,"method":"call_tool","params":{"name":"get_candidate","arguments":{}}}"#,
        r#"{"jsonrpc":"2.0","id":5,"error":{"code":-32602,"message":"'candidate_id' is required"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":6,"method":"ping","params":7}"#,
        r#"{"jsonrpc":"2.0","id":6,"error":{"code":-32602,"message":"Params must be an object or an array"}}"#,
    ),
    (
        r#"{"jsonrpc":"2.0","id":null,"method":"ping"}"#,
        r#"{"jsonrpc":"2.0","id":null,"error":{"code":-32600,"message":"Invalid Request","data":"id must not be null"}}"#,
    ),
];

#[tokio::test]
async fn golden_offline_transcript() {
    let dispatcher = app_dispatcher(UNREACHABLE_BASE_URL);

    for (request, expected) in OFFLINE_TRANSCRIPT {
        assert_eq!(
            exchange(&dispatcher, request).await,
            *expected,
            "golden mismatch for {request}"
        );
    }
}

#[tokio::test]
async fn golden_search_offers_via_call_tool() {
    let server = MockServer::start().await;
    let dispatcher = app_dispatcher(&server.uri());

    let upstream = json!({
        "offers": [
            { "id": 101, "title": "Backend Engineer", "status": "published" },
            { "id": 102, "title": "Product Designer", "status": "published" }
        ]
    });
    Mock::given(method("GET"))
        .and(path("/c/acme/offers"))
        .and(query_param("state", "published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let out = exchange(
        &dispatcher,
        r#"{"jsonrpc":"2.0","id":10,"method":"call_tool","params":{"name":"search_offers","arguments":{"state":"published"}}}"#,
    )
    .await;

    let actual: Value = serde_json::from_str(&out).unwrap();
    let expected = json!({
        "jsonrpc": "2.0",
        "id": 10,
        "result": {
            "content": [
                { "type": "application/json", "data": upstream }
            ]
        }
    });
    assert_eq!(actual, expected);
}

#[tokio::test]
async fn golden_read_pipelines_resource() {
    let server = MockServer::start().await;
    let dispatcher = app_dispatcher(&server.uri());

    let upstream = json!({ "pipelines": [{ "id": 1, "name": "Default" }] });
    Mock::given(method("GET"))
        .and(path("/c/acme/pipelines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
        .mount(&server)
        .await;

    let out = exchange(
        &dispatcher,
        r#"{"jsonrpc":"2.0","id":"r","method":"read_resource","params":{"uri":"recruitee://pipelines"}}"#,
    )
    .await;

    let actual: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        actual,
        json!({
            "jsonrpc": "2.0",
            "id": "r",
            "result": {
                "contents": [
                    { "type": "application/json", "data": upstream }
                ]
            }
        })
    );
}

#[tokio::test]
async fn golden_list_resources() {
    let dispatcher = app_dispatcher(UNREACHABLE_BASE_URL);
    let out = exchange(
        &dispatcher,
        r#"{"jsonrpc":"2.0","id":11,"method":"list_resources"}"#,
    )
    .await;

    let actual: Value = serde_json::from_str(&out).unwrap();
    assert_eq!(
        actual,
        json!({
            "jsonrpc": "2.0",
            "id": 11,
            "result": {
                "resources": [
                    {
                        "uri": "recruitee://offers",
                        "name": "Job offers",
                        "description": "Published job offers for the configured company."
                    },
                    {
                        "uri": "recruitee://pipelines",
                        "name": "Pipelines",
                        "description": "Recruiting pipelines and stages."
                    }
                ]
            }
        })
    );
}
