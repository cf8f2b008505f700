//! Evaluation and per-bid scoring models and DTOs.
//!
//! The weighted rubric is free-form JSON; this layer stores it opaquely.

use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::Recommendation;

/// A row from the `evaluations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evaluation {
    pub id: DbId,
    pub tender_id: DbId,
    pub evaluator_id: Option<DbId>,
    pub technical_criteria: serde_json::Value,
    pub financial_criteria: serde_json::Value,
    pub notes: String,
    pub is_completed: bool,
    pub evaluation_date: Timestamp,
}

/// DTO for opening an evaluation on a tender.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEvaluation {
    pub tender_id: DbId,
    pub evaluator_id: Option<DbId>,
    pub technical_criteria: Option<serde_json::Value>,
    pub financial_criteria: Option<serde_json::Value>,
    pub notes: Option<String>,
}

/// A row from the `bid_evaluations` table. Unique per (evaluation, bid).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidEvaluation {
    pub id: DbId,
    pub evaluation_id: DbId,
    pub bid_id: DbId,
    pub technical_scores: serde_json::Value,
    pub financial_score: Decimal,
    pub total_score: Decimal,
    pub remarks: String,
    pub recommendation: Recommendation,
    pub evaluated_at: Timestamp,
}

/// DTO for scoring one bid within an evaluation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBidEvaluation {
    pub bid_id: DbId,
    pub technical_scores: Option<serde_json::Value>,
    pub financial_score: Decimal,
    pub total_score: Decimal,
    pub remarks: Option<String>,
    pub recommendation: Recommendation,
}
