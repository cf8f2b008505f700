//! Bid entity model and DTOs.

use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::BidStatus;

/// A row from the `bids` table.
///
/// At most one bid per (tender, vendor) pair. `submitted_at` is stamped
/// by the transition to submitted and never overwritten by later
/// transitions; no other transition stamps a timestamp. `reviewed_at`
/// is recorded manually when an evaluator gets to the bid.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Bid {
    pub id: DbId,
    pub bid_number: String,
    pub slug: String,
    pub tender_id: DbId,
    pub vendor_id: DbId,
    pub bid_amount: Decimal,
    pub currency: String,
    pub technical_proposal: String,
    pub financial_proposal: String,
    pub delivery_timeline_days: i32,
    pub status: BidStatus,
    pub technical_score: Option<Decimal>,
    pub financial_score: Option<Decimal>,
    pub total_score: Option<Decimal>,
    pub evaluator_comments: String,
    pub submitted_at: Option<Timestamp>,
    pub reviewed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a bid.
///
/// `slug` defaults to a compound of the vendor's company name, the
/// tender number, and the bid number; the repository resolves the first
/// two from the referenced rows.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBid {
    pub bid_number: String,
    pub slug: Option<String>,
    pub tender_id: DbId,
    pub vendor_id: DbId,
    pub bid_amount: Decimal,
    pub currency: Option<String>,
    pub technical_proposal: Option<String>,
    pub financial_proposal: Option<String>,
    pub delivery_timeline_days: Option<i32>,
}

/// DTO for updating a draft bid. Status changes and scoring go through
/// their dedicated operations; `reviewed_at` is the one timestamp
/// recorded manually rather than by a transition.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBid {
    pub bid_amount: Option<Decimal>,
    pub technical_proposal: Option<String>,
    pub financial_proposal: Option<String>,
    pub delivery_timeline_days: Option<i32>,
    pub reviewed_at: Option<Timestamp>,
}

/// DTO for recording evaluator scores on a bid.
#[derive(Debug, Clone, Deserialize)]
pub struct BidScores {
    pub technical_score: Decimal,
    pub financial_score: Decimal,
    pub total_score: Decimal,
    pub evaluator_comments: Option<String>,
}
