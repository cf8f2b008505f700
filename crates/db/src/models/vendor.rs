//! Vendor entity model and DTOs.

use procura_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::BusinessType;

/// A row from the `vendors` table.
///
/// `rating` and `total_reviews` are denormalized from contract reviews
/// and recomputed when a review is recorded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vendor {
    pub id: DbId,
    pub user_id: DbId,
    pub company_name: String,
    pub slug: String,
    pub business_type: BusinessType,
    pub registration_number: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub country: String,
    pub year_established: Option<i32>,
    pub annual_turnover: Option<Decimal>,
    pub is_verified: bool,
    pub is_blacklisted: bool,
    pub rating: Decimal,
    pub total_reviews: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a vendor. `slug` defaults to `slugify(company_name)`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendor {
    pub user_id: DbId,
    pub company_name: String,
    pub slug: Option<String>,
    pub business_type: BusinessType,
    pub registration_number: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub year_established: Option<i32>,
    pub annual_turnover: Option<Decimal>,
}

/// DTO for updating a vendor. All fields are optional; the slug is never
/// recomputed and verification/blacklist flags have dedicated operations.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateVendor {
    pub company_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub year_established: Option<i32>,
    pub annual_turnover: Option<Decimal>,
}
