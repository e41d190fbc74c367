//! Argument and payload types for Recruitee operations.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Offer or candidate identifier; Recruitee accepts numeric ids and slugs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceId {
    Number(i64),
    Slug(String),
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Slug(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ResourceId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Filters for listing offers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferFilter {
    pub state: Option<String>,
    pub limit: Option<u32>,
    pub include_description: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetOfferArgs {
    pub offer_id: Option<ResourceId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateSearch {
    pub query: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetCandidateArgs {
    pub candidate_id: Option<ResourceId>,
}

/// Arguments accepted by `create_candidate`.
///
/// The three name/email fields are optional here so that a missing field can
/// be reported together with the others instead of one at a time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCandidateArgs {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub offer_id: Option<i64>,
    pub pipeline_id: Option<i64>,
    pub notes: Option<String>,
    pub custom_fields: Option<Map<String, Value>>,
}

impl CreateCandidateArgs {
    /// Names of required fields that are absent or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .filter(|(_, v)| v.as_deref().map_or(true, |s| s.trim().is_empty()))
        .map(|(name, _)| name)
        .collect()
    }
}

/// Candidate record sent to `POST /candidates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
}

impl NewCandidate {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            emails: vec![email.into()],
            phones: None,
            source: None,
            offer_id: None,
            pipeline_id: None,
            notes: None,
            custom_fields: None,
        }
    }

    /// Build from validated arguments. Blank optional strings and empty
    /// custom-field maps are dropped. Returns `None` if a required field is
    /// missing; call [`CreateCandidateArgs::missing_fields`] first for the
    /// error message.
    pub fn from_args(args: CreateCandidateArgs) -> Option<Self> {
        let non_blank = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let mut candidate = Self::new(
            non_blank(args.first_name)?,
            non_blank(args.last_name)?,
            non_blank(args.email)?,
        );
        candidate.phones = non_blank(args.phone).map(|p| vec![p]);
        candidate.source = non_blank(args.source);
        candidate.offer_id = args.offer_id;
        candidate.pipeline_id = args.pipeline_id;
        candidate.notes = non_blank(args.notes);
        candidate.custom_fields = args.custom_fields.filter(|m| !m.is_empty());
        Some(candidate)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CandidateEnvelope<'a> {
    pub candidate: &'a NewCandidate,
}
