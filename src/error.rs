//! Failure types for the method-handler contract.

use serde_json::json;
use thiserror::Error;

use crate::protocol::JsonRpcError;

/// Ways a method handler can fail.
///
/// The dispatcher turns each variant into a JSON-RPC error object; see the
/// `From<HandlerError> for JsonRpcError` impl for the code mapping.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Params were decoded but do not have the shape the handler needs.
    #[error("{0}")]
    InvalidParams(String),

    /// The addressed record, tool or resource does not exist.
    ///
    /// `upstream` is set when the Recruitee API itself answered 404: the
    /// status and the full error text travel in `data`.
    #[error("{message}")]
    NotFound {
        message: String,
        upstream: Option<(u16, String)>,
    },

    /// The upstream API failed or could not be reached.
    #[error("{message}")]
    Upstream {
        message: String,
        status: Option<u16>,
        detail: String,
    },

    #[error("{0}")]
    Internal(String),
}

impl HandlerError {
    pub fn invalid_params(detail: impl Into<String>) -> Self {
        Self::InvalidParams(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: detail.into(),
            upstream: None,
        }
    }
}

/// Convert a handler failure into a JSON-RPC error.
///
/// Validation failures → -32602 (Invalid params)
/// Missing records     → -32001 (application range), upstream detail in `data`
/// Upstream/internal   → -32603 (Internal error), detail carried in `data`
impl From<HandlerError> for JsonRpcError {
    fn from(err: HandlerError) -> Self {
        match err {
            HandlerError::InvalidParams(detail) => JsonRpcError::invalid_params(detail),
            HandlerError::NotFound { message, upstream } => {
                let err = JsonRpcError::resource_not_found(message);
                match upstream {
                    Some((status, detail)) => {
                        err.with_data(json!({ "status": status, "detail": detail }))
                    }
                    None => err,
                }
            }
            HandlerError::Upstream {
                message,
                status,
                detail,
            } => JsonRpcError::internal_error(message)
                .with_data(json!({ "status": status, "detail": detail })),
            HandlerError::Internal(detail) => JsonRpcError::internal_error("Internal error")
                .with_data(json!({ "detail": detail })),
        }
    }
}
