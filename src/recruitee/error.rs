//! Error types for the Recruitee REST client.

use thiserror::Error;

use crate::error::HandlerError;

#[derive(Debug, Error)]
pub enum RecruiteeError {
    /// The API answered with a non-success status.
    #[error("API request to '{url}' failed with status={status}.{}", body_suffix(.body))]
    Api {
        status: u16,
        body: Option<String>,
        url: String,
    },

    /// The API could not be reached (DNS, refused, timeout, ...).
    #[error("Connection error while requesting '{url}': {message}")]
    Connection { url: String, message: String },

    #[error("Invalid JSON response returned by '{url}'")]
    InvalidResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(b) if !b.is_empty() => format!(" body={b}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, RecruiteeError>;

/// Map client failures onto the handler contract.
///
/// A 404 is a missing record; every other failure is an upstream error. In
/// both cases the full text travels as `detail` while the message stays short.
impl From<RecruiteeError> for HandlerError {
    fn from(err: RecruiteeError) -> Self {
        let detail = err.to_string();
        match err {
            RecruiteeError::Api { status: 404, .. } => HandlerError::NotFound {
                message: "Recruitee record not found".into(),
                upstream: Some((404, detail)),
            },
            RecruiteeError::Api { status, .. } => HandlerError::Upstream {
                message: format!("Recruitee API request failed with status {status}"),
                status: Some(status),
                detail,
            },
            RecruiteeError::Connection { .. } => HandlerError::Upstream {
                message: "Could not reach the Recruitee API".into(),
                status: None,
                detail,
            },
            RecruiteeError::InvalidResponse { .. } => HandlerError::Upstream {
                message: "Recruitee API returned an invalid response".into(),
                status: None,
                detail,
            },
            RecruiteeError::Client(_) => HandlerError::Internal(detail),
        }
    }
}
