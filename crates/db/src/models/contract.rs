//! Contract entity model and DTOs.

use chrono::NaiveDate;
use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::ContractStatus;

/// A row from the `contracts` table.
///
/// One-to-one with both its tender and its winning bid.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Contract {
    pub id: DbId,
    pub contract_number: String,
    pub slug: String,
    pub tender_id: DbId,
    pub winning_bid_id: DbId,
    pub vendor_id: DbId,
    pub contract_value: Decimal,
    pub currency: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i32,
    pub status: ContractStatus,
    pub terms_and_conditions: String,
    pub performance_bond_amount: Option<Decimal>,
    pub retention_percentage: Decimal,
    pub signed_by_organization: bool,
    pub signed_by_vendor: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for awarding a tender: the contract terms to record alongside the
/// tender and bid status flips.
///
/// `slug` defaults to `slugify(contract_number-company_name)`; the
/// repository resolves the company name from the winning bid's vendor.
#[derive(Debug, Clone, Deserialize)]
pub struct AwardContract {
    pub contract_number: String,
    pub slug: Option<String>,
    pub winning_bid_id: DbId,
    pub contract_value: Decimal,
    pub currency: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: i32,
    pub terms_and_conditions: Option<String>,
    pub performance_bond_amount: Option<Decimal>,
    pub retention_percentage: Option<Decimal>,
}

/// DTO for updating contract terms. Status changes go through
/// `ContractRepo::set_status`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContract {
    pub contract_value: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration_days: Option<i32>,
    pub terms_and_conditions: Option<String>,
    pub performance_bond_amount: Option<Decimal>,
    pub retention_percentage: Option<Decimal>,
    pub signed_by_organization: Option<bool>,
    pub signed_by_vendor: Option<bool>,
}

/// Read-side aggregate over a contract's milestones.
///
/// Computed on demand; a contract with no milestones yields all zeros.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MilestoneSummary {
    pub total: i64,
    pub paid: i64,
    pub total_amount: Decimal,
}
