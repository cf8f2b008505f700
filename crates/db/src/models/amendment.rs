//! Tender amendment model and DTOs.
//!
//! Amendments record changes to published tender terms. They are created
//! once and never mutated afterwards, so there is no update DTO.

use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tender_amendments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Amendment {
    pub id: DbId,
    pub tender_id: DbId,
    pub amendment_number: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub affects_submission_deadline: bool,
    pub new_submission_deadline: Option<Timestamp>,
    pub affects_estimated_value: bool,
    pub new_estimated_value: Option<Decimal>,
    pub published_at: Timestamp,
}

/// DTO for publishing an amendment.
///
/// `slug` defaults to `slugify(tender_number-amendment_number)`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAmendment {
    pub amendment_number: String,
    pub slug: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub affects_submission_deadline: Option<bool>,
    pub new_submission_deadline: Option<Timestamp>,
    pub affects_estimated_value: Option<bool>,
    pub new_estimated_value: Option<Decimal>,
}
