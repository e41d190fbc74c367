use reqwest::{header, Client, Method};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::RecruiteeConfig;

use super::error::{RecruiteeError, Result};
use super::types::{CandidateEnvelope, NewCandidate, OfferFilter, ResourceId};

/// Minimal async client for the Recruitee REST API.
///
/// Every path is resolved under `{base_url}/c/{company_id}/`.
#[derive(Debug, Clone)]
pub struct RecruiteeClient {
    http: Client,
    company_id: String,
    api_token: Option<String>,
    base_url: String,
}

impl RecruiteeClient {
    pub fn new(config: &RecruiteeConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RecruiteeError::Client)?;

        Ok(Self::with_client(http, config))
    }

    /// Use a caller-supplied `reqwest::Client`; its timeout settings apply.
    pub fn with_client(http: Client, config: &RecruiteeConfig) -> Self {
        Self {
            http,
            company_id: config.company_id.clone(),
            api_token: config.api_token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// List job offers, optionally filtered by state.
    pub async fn list_offers(&self, filter: &OfferFilter) -> Result<Value> {
        let mut query = Vec::new();
        if let Some(state) = filter.state.as_deref().filter(|s| !s.is_empty()) {
            query.push(("state", state.to_string()));
        }
        if let Some(limit) = filter.limit.filter(|l| *l > 0) {
            query.push(("limit", limit.to_string()));
        }
        if filter.include_description == Some(true) {
            query.push(("include_description", "true".to_string()));
        }
        self.request::<()>(Method::GET, "offers", &query, None).await
    }

    pub async fn get_offer(&self, offer_id: &ResourceId) -> Result<Value> {
        self.request::<()>(Method::GET, &format!("offers/{offer_id}"), &[], None)
            .await
    }

    pub async fn list_pipelines(&self) -> Result<Value> {
        self.request::<()>(Method::GET, "pipelines", &[], None).await
    }

    /// Keyword search over candidates.
    pub async fn search_candidates(
        &self,
        query: &str,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value> {
        let mut params = vec![("query", query.to_string())];
        if let Some(page) = page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.request::<()>(Method::GET, "candidates", &params, None)
            .await
    }

    pub async fn get_candidate(&self, candidate_id: &ResourceId) -> Result<Value> {
        self.request::<()>(
            Method::GET,
            &format!("candidates/{candidate_id}"),
            &[],
            None,
        )
        .await
    }

    /// Create a candidate. Not idempotent: every call creates a record.
    pub async fn create_candidate(&self, candidate: &NewCandidate) -> Result<Value> {
        let body = CandidateEnvelope { candidate };
        self.request(Method::POST, "candidates", &[], Some(&body))
            .await
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/c/{}/{}",
            self.base_url,
            self.company_id,
            path.trim_start_matches('/')
        )
    }

    async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "recruitee request");

        let mut builder = self
            .http
            .request(method, &url)
            .header(header::ACCEPT, "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| RecruiteeError::Connection {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let raw = response.bytes().await.map_err(|e| RecruiteeError::Connection {
            url: url.clone(),
            message: e.to_string(),
        })?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&raw).into_owned();
            return Err(RecruiteeError::Api {
                status: status.as_u16(),
                body: Some(body).filter(|b| !b.is_empty()),
                url,
            });
        }

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(&raw).map_err(|source| {
            tracing::debug!(%url, "invalid JSON payload from upstream");
            RecruiteeError::InvalidResponse { url, source }
        })
    }
}
