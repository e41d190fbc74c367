use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::HandlerError;
use crate::protocol::{tool_result, ToolCallParams};
use crate::recruitee::RecruiteeClient;
use crate::registry::MethodHandler;

use super::{candidates, offers, parse_args};

/// The Recruitee operations exposed as tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    SearchOffers,
    GetOffer,
    SearchCandidates,
    GetCandidate,
    CreateCandidate,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::SearchOffers,
        Tool::GetOffer,
        Tool::SearchCandidates,
        Tool::GetCandidate,
        Tool::CreateCandidate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::SearchOffers => "search_offers",
            Self::GetOffer => "get_offer",
            Self::SearchCandidates => "search_candidates",
            Self::GetCandidate => "get_candidate",
            Self::CreateCandidate => "create_candidate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::SearchOffers => "List job offers for the company.",
            Self::GetOffer => "Fetch a single offer by identifier.",
            Self::SearchCandidates => "Search candidates by text query.",
            Self::GetCandidate => "Fetch a candidate by identifier.",
            Self::CreateCandidate => "Create a new candidate record.",
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Self::SearchOffers => json!({
                "type": "object",
                "properties": {
                    "state": {
                        "type": ["string", "null"],
                        "description": "Filter by offer state (published, archived, etc)."
                    },
                    "limit": {
                        "type": ["integer", "null"],
                        "minimum": 0,
                        "description": "Maximum number of offers to return."
                    },
                    "include_description": {
                        "type": ["boolean", "null"],
                        "description": "Include offer descriptions in the payload."
                    }
                }
            }),
            Self::GetOffer => json!({
                "type": "object",
                "required": ["offer_id"],
                "properties": {
                    "offer_id": {
                        "type": ["integer", "string"],
                        "description": "Offer identifier."
                    }
                }
            }),
            Self::SearchCandidates => json!({
                "type": "object",
                "required": ["query"],
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Query string that matches candidate fields."
                    },
                    "page": { "type": ["integer", "null"], "minimum": 0 },
                    "limit": { "type": ["integer", "null"], "minimum": 0 }
                }
            }),
            Self::GetCandidate => json!({
                "type": "object",
                "required": ["candidate_id"],
                "properties": {
                    "candidate_id": { "type": ["integer", "string"] }
                }
            }),
            Self::CreateCandidate => json!({
                "type": "object",
                "required": ["first_name", "last_name", "email"],
                "properties": {
                    "first_name": { "type": "string" },
                    "last_name": { "type": "string" },
                    "email": { "type": "string" },
                    "phone": { "type": ["string", "null"] },
                    "source": { "type": ["string", "null"] },
                    "offer_id": { "type": ["integer", "null"] },
                    "pipeline_id": { "type": ["integer", "null"] },
                    "notes": { "type": ["string", "null"] },
                    "custom_fields": { "type": ["object", "null"] }
                }
            }),
        }
    }

    pub async fn invoke(
        self,
        client: &RecruiteeClient,
        args: Value,
    ) -> Result<Value, HandlerError> {
        match self {
            Self::SearchOffers => offers::search(client, args).await,
            Self::GetOffer => offers::get(client, args).await,
            Self::SearchCandidates => candidates::search(client, args).await,
            Self::GetCandidate => candidates::get(client, args).await,
            Self::CreateCandidate => candidates::create(client, args).await,
        }
    }
}

/// A tool registered as a method of its own name; returns the raw API payload.
pub struct ToolMethod {
    pub tool: Tool,
    pub client: Arc<RecruiteeClient>,
}

#[async_trait]
impl MethodHandler for ToolMethod {
    async fn call(&self, params: Value) -> Result<Value, HandlerError> {
        self.tool.invoke(&self.client, params).await
    }
}

/// `list_tools`: name, description and input schema of every tool.
pub async fn list_tools(_params: Value) -> Result<Value, HandlerError> {
    let tools: Vec<Value> = Tool::ALL
        .into_iter()
        .map(|tool| {
            json!({
                "name": tool.name(),
                "description": tool.description(),
                "inputSchema": tool.input_schema(),
            })
        })
        .collect();
    Ok(json!({ "tools": tools }))
}

/// `call_tool`: run a tool by name and wrap its payload as content.
pub struct CallTool {
    pub client: Arc<RecruiteeClient>,
}

#[async_trait]
impl MethodHandler for CallTool {
    async fn call(&self, params: Value) -> Result<Value, HandlerError> {
        let params: ToolCallParams = parse_args("call_tool", params)?;
        let tool = Tool::from_name(&params.name)
            .ok_or_else(|| HandlerError::not_found(format!("Unknown tool: {}", params.name)))?;

        let arguments = match params.arguments {
            None | Some(Value::Null) => json!({}),
            Some(args) => args,
        };

        tracing::debug!(tool = tool.name(), "calling tool");
        let data = tool.invoke(&self.client, arguments).await?;
        Ok(tool_result(data))
    }
}

pub fn call_tool_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string", "description": "Tool to run." },
            "arguments": { "type": ["object", "null"] }
        }
    })
}
