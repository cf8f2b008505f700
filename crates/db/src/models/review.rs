//! Post-completion contract review model and DTOs.

use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table. At most one per contract.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub contract_id: DbId,
    pub reviewer_id: Option<DbId>,
    pub quality_rating: i16,
    pub timeliness_rating: i16,
    pub professionalism_rating: i16,
    pub overall_rating: Decimal,
    pub comment: String,
    pub would_work_again: bool,
    pub created_at: Timestamp,
}

/// DTO for reviewing a completed contract. Ratings are 1 to 5.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub reviewer_id: Option<DbId>,
    pub quality_rating: i16,
    pub timeliness_rating: i16,
    pub professionalism_rating: i16,
    pub overall_rating: Decimal,
    pub comment: Option<String>,
    pub would_work_again: bool,
}
