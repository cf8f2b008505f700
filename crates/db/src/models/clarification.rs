//! Clarification (vendor question / organization answer) model and DTOs.

use procura_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `clarifications` table.
///
/// Created by a vendor question; mutated exactly once, when answered.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Clarification {
    pub id: DbId,
    pub tender_id: DbId,
    pub vendor_id: DbId,
    pub question: String,
    pub answer: String,
    pub is_public: bool,
    pub is_answered: bool,
    pub asked_at: Timestamp,
    pub answered_at: Option<Timestamp>,
}

/// DTO for a vendor asking a question about a tender.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClarification {
    pub vendor_id: DbId,
    pub question: String,
    pub is_public: Option<bool>,
}
