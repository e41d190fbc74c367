use serde_json::Value;

use crate::error::HandlerError;
use crate::recruitee::{
    CandidateSearch, CreateCandidateArgs, GetCandidateArgs, NewCandidate, RecruiteeClient,
};

use super::parse_args;

/// Handle `search_candidates`. A blank query is rejected before any
/// upstream call.
pub async fn search(client: &RecruiteeClient, args: Value) -> Result<Value, HandlerError> {
    let search: CandidateSearch = parse_args("search_candidates", args)?;
    let query = search
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| HandlerError::invalid_params("'query' is required"))?;
    Ok(client
        .search_candidates(query, search.page, search.limit)
        .await?)
}

/// Handle `get_candidate`.
pub async fn get(client: &RecruiteeClient, args: Value) -> Result<Value, HandlerError> {
    let args: GetCandidateArgs = parse_args("get_candidate", args)?;
    let candidate_id = args
        .candidate_id
        .ok_or_else(|| HandlerError::invalid_params("'candidate_id' is required"))?;
    Ok(client.get_candidate(&candidate_id).await?)
}

/// Handle `create_candidate`.
///
/// All missing required fields are reported at once. The upstream POST is
/// issued at most once per call.
pub async fn create(client: &RecruiteeClient, args: Value) -> Result<Value, HandlerError> {
    let args: CreateCandidateArgs = parse_args("create_candidate", args)?;

    let missing = args.missing_fields();
    if !missing.is_empty() {
        return Err(HandlerError::invalid_params(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let candidate = NewCandidate::from_args(args)
        .ok_or_else(|| HandlerError::invalid_params("Missing required fields"))?;
    Ok(client.create_candidate(&candidate).await?)
}
