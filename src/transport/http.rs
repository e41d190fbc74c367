//! HTTP transport: one JSON-RPC endpoint plus discovery and health routes.
//!
//! Routes: `POST /` (JSON-RPC), `GET /.well-known/mcp.json` (manifest),
//! `GET /health` (liveness).

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::dispatch::Dispatcher;
use crate::manifest::DiscoveryManifest;
use crate::protocol::{JsonRpcError, JsonRpcResponse};

use super::{TransportError, MAX_MESSAGE_BYTES};

pub const JSONRPC_PATH: &str = "/";
pub const MANIFEST_PATH: &str = "/.well-known/mcp.json";
pub const HEALTH_PATH: &str = "/health";

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// Builds the axum `Router` with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(JSONRPC_PATH, post(handle_rpc))
        .route(MANIFEST_PATH, get(handle_manifest))
        .route(HEALTH_PATH, get(handle_health))
        .layer(DefaultBodyLimit::max(MAX_MESSAGE_BYTES))
        .with_state(state)
}

/// Axum-based HTTP server for the JSON-RPC transport.
pub struct HttpServer {
    addr: String,
    state: AppState,
}

impl HttpServer {
    pub fn new(dispatcher: Arc<Dispatcher>, addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            state: AppState { dispatcher },
        }
    }

    /// Bind the listener. Fails before any request is served if the address
    /// is unusable.
    pub async fn bind(&self) -> Result<TcpListener, TransportError> {
        TcpListener::bind(&self.addr)
            .await
            .map_err(|source| TransportError::Bind {
                addr: self.addr.clone(),
                source,
            })
    }

    /// Bind and serve until Ctrl-C.
    pub async fn run(self) -> Result<(), TransportError> {
        let listener = self.bind().await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<S>(self, listener: TcpListener, shutdown: S) -> Result<(), TransportError>
    where
        S: std::future::Future<Output = ()> + Send + 'static,
    {
        match listener.local_addr() {
            Ok(addr) => info!(%addr, "JSON-RPC HTTP server ready"),
            Err(_) => info!(addr = %self.addr, "JSON-RPC HTTP server ready"),
        }

        let router = build_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(TransportError::Serve)
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("received shutdown signal, stopping HTTP server");
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn handle_manifest(State(state): State<AppState>) -> impl IntoResponse {
    Json(DiscoveryManifest::from_registry(
        state.dispatcher.registry(),
        JSONRPC_PATH,
    ))
}

/// JSON-RPC errors are reported in the body with HTTP 200. Only a body that
/// cannot be read at all is an HTTP-level failure (400). Notifications get
/// 204 and no body.
async fn handle_rpc(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!(error = %rejection, "unreadable request body");
            let resp = JsonRpcResponse::error(
                None,
                JsonRpcError::parse_error().with_data(Value::String(rejection.body_text())),
            );
            return (StatusCode::BAD_REQUEST, Json(resp)).into_response();
        }
    };

    match state.dispatcher.dispatch(&body).await {
        Some(out) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            out,
        )
            .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
