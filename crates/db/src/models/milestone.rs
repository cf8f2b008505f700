//! Milestone entity model and DTOs.

use chrono::NaiveDate;
use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::MilestoneStatus;

/// A row from the `milestones` table.
///
/// `sequence_number` is unique within a contract. The transition to
/// completed stamps `completion_date` and the transition to paid stamps
/// `payment_date`; both only when still null, so manually recorded dates
/// survive.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Milestone {
    pub id: DbId,
    pub contract_id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub sequence_number: i32,
    pub deliverables: String,
    pub amount: Decimal,
    pub percentage_of_total: Decimal,
    pub due_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a milestone under a contract.
///
/// `slug` defaults to `slugify(contract_number)-milestone-{sequence}`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMilestone {
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub sequence_number: i32,
    pub deliverables: Option<String>,
    pub amount: Decimal,
    pub percentage_of_total: Decimal,
    pub due_date: NaiveDate,
}

/// DTO for updating a milestone. Dates may be overwritten manually here;
/// status changes go through `MilestoneRepo::set_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMilestone {
    pub title: Option<String>,
    pub description: Option<String>,
    pub deliverables: Option<String>,
    pub amount: Option<Decimal>,
    pub percentage_of_total: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub payment_date: Option<NaiveDate>,
}
