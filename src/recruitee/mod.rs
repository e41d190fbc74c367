//! Client for the Recruitee REST API, used by the tool handlers.

pub mod client;
pub mod error;
pub mod types;

pub use client::RecruiteeClient;
pub use error::RecruiteeError;
pub use types::{
    CandidateSearch, CreateCandidateArgs, GetCandidateArgs, GetOfferArgs, NewCandidate,
    OfferFilter, ResourceId,
};
