//! Entity types served by the objection catalog.
//!
//! Field names follow the service's JSON wire format, so these structs
//! deserialize straight off the REST responses.

use crate::identity::{ObjectionId, QuoteId, ResponseId, Timestamp};
use serde::{Deserialize, Serialize};

/// A single suggested rebuttal under an objection. Order within
/// `Objection::responses` is display order and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rebuttal {
    pub id: ResponseId,
    pub text: String,
    pub created_at: Timestamp,
}

/// A sales-rejection scenario with suggested rebuttal responses.
///
/// `usage_count` is server-truth only: the client never bumps it locally,
/// it reflects whatever the last fetch returned. `is_favorite` is the one
/// field the client mutates in place (optimistically, on toggle).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objection {
    pub id: ObjectionId,
    pub title: String,
    pub responses: Vec<Rebuttal>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub usage_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Read-only motivational quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: Timestamp,
}
