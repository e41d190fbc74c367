use serde_json::Value;

use crate::error::HandlerError;
use crate::recruitee::{GetOfferArgs, OfferFilter, RecruiteeClient};

use super::parse_args;

/// Handle `search_offers`: list job offers for the company.
pub async fn search(client: &RecruiteeClient, args: Value) -> Result<Value, HandlerError> {
    let filter: OfferFilter = parse_args("search_offers", args)?;
    Ok(client.list_offers(&filter).await?)
}

/// Handle `get_offer`.
pub async fn get(client: &RecruiteeClient, args: Value) -> Result<Value, HandlerError> {
    let args: GetOfferArgs = parse_args("get_offer", args)?;
    let offer_id = args
        .offer_id
        .ok_or_else(|| HandlerError::invalid_params("'offer_id' is required"))?;
    Ok(client.get_offer(&offer_id).await?)
}
