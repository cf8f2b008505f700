//! Tender entity model and DTOs.

use chrono::NaiveDate;
use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{ProcurementMethod, TenderStatus};

/// A row from the `tenders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tender {
    pub id: DbId,
    pub tender_number: String,
    pub slug: String,
    pub title: String,
    pub organization_id: DbId,
    pub category_id: Option<DbId>,
    pub description: String,
    pub detailed_requirements: String,
    pub status: TenderStatus,
    pub procurement_method: ProcurementMethod,
    pub estimated_value: Decimal,
    pub currency: String,
    pub bid_security_amount: Option<Decimal>,
    pub publication_date: Timestamp,
    pub submission_deadline: Timestamp,
    pub opening_date: Timestamp,
    pub expected_award_date: Option<NaiveDate>,
    pub project_location: String,
    pub project_country: String,
    pub is_featured: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tender.
///
/// `slug` defaults to `slugify(title)-lowercase(tender_number)` when
/// omitted. `status` defaults to draft.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTender {
    pub tender_number: String,
    pub slug: Option<String>,
    pub title: String,
    pub organization_id: DbId,
    pub category_id: Option<DbId>,
    pub description: Option<String>,
    pub detailed_requirements: Option<String>,
    pub status: Option<TenderStatus>,
    pub procurement_method: ProcurementMethod,
    pub estimated_value: Decimal,
    pub currency: Option<String>,
    pub bid_security_amount: Option<Decimal>,
    pub publication_date: Timestamp,
    pub submission_deadline: Timestamp,
    pub opening_date: Timestamp,
    pub expected_award_date: Option<NaiveDate>,
    pub project_location: Option<String>,
    pub project_country: Option<String>,
    pub created_by: Option<DbId>,
}

/// DTO for updating a tender. All fields are optional; the slug and
/// tender number are immutable, and status changes go through the
/// dedicated transition operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTender {
    pub title: Option<String>,
    pub category_id: Option<DbId>,
    pub description: Option<String>,
    pub detailed_requirements: Option<String>,
    pub procurement_method: Option<ProcurementMethod>,
    pub estimated_value: Option<Decimal>,
    pub bid_security_amount: Option<Decimal>,
    pub submission_deadline: Option<Timestamp>,
    pub opening_date: Option<Timestamp>,
    pub expected_award_date: Option<NaiveDate>,
    pub project_location: Option<String>,
    pub project_country: Option<String>,
    pub is_featured: Option<bool>,
}

/// Optional filters for tender listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TenderFilter {
    pub status: Option<TenderStatus>,
    pub organization_id: Option<DbId>,
    pub category_id: Option<DbId>,
    /// Case-insensitive substring match on title or tender number.
    pub search: Option<String>,
}

/// Per-status bid counts for one tender.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidStatistics {
    pub total: i64,
    pub submitted: i64,
    pub under_review: i64,
    pub awarded: i64,
}
