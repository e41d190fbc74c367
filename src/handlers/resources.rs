use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::HandlerError;
use crate::protocol::{resource_contents, ReadResourceParams};
use crate::recruitee::{OfferFilter, RecruiteeClient};
use crate::registry::MethodHandler;

use super::parse_args;

pub const OFFERS_URI: &str = "recruitee://offers";
pub const PIPELINES_URI: &str = "recruitee://pipelines";

/// `list_resources`: the fixed set of readable resources.
pub async fn list_resources(_params: Value) -> Result<Value, HandlerError> {
    Ok(json!({
        "resources": [
            {
                "uri": OFFERS_URI,
                "name": "Job offers",
                "description": "Published job offers for the configured company."
            },
            {
                "uri": PIPELINES_URI,
                "name": "Pipelines",
                "description": "Recruiting pipelines and stages."
            }
        ]
    }))
}

/// `read_resource`: fetch a resource by URI.
pub struct ReadResource {
    pub client: Arc<RecruiteeClient>,
}

#[async_trait]
impl MethodHandler for ReadResource {
    async fn call(&self, params: Value) -> Result<Value, HandlerError> {
        let params: ReadResourceParams = parse_args("read_resource", params)?;
        let data = match params.uri.as_str() {
            OFFERS_URI => {
                let filter = OfferFilter {
                    include_description: Some(true),
                    ..OfferFilter::default()
                };
                self.client.list_offers(&filter).await?
            }
            PIPELINES_URI => self.client.list_pipelines().await?,
            other => {
                return Err(HandlerError::not_found(format!(
                    "Unsupported resource URI: {other}"
                )))
            }
        };
        Ok(resource_contents(data))
    }
}

pub fn read_resource_schema() -> Value {
    json!({
        "type": "object",
        "required": ["uri"],
        "properties": {
            "uri": { "type": "string", "description": "Resource URI from list_resources." }
        }
    })
}
