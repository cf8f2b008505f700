//! Repository for the `vendors` table and the vendor/category link table.

use procura_core::slug::slugify;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::vendor::{CreateVendor, UpdateVendor, Vendor};

const COLUMNS: &str = "id, user_id, company_name, slug, business_type, \
    registration_number, email, phone, city, country, year_established, \
    annual_turnover, is_verified, is_blacklisted, rating, total_reviews, \
    created_at, updated_at";

/// Provides CRUD operations for vendors.
pub struct VendorRepo;

impl VendorRepo {
    /// Insert a new vendor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateVendor) -> Result<Vendor, sqlx::Error> {
        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| slugify(&input.company_name));

        let query = format!(
            "INSERT INTO vendors
                (user_id, company_name, slug, business_type, registration_number,
                 email, phone, city, country, year_established, annual_turnover)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, ''), $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(input.user_id)
            .bind(&input.company_name)
            .bind(&slug)
            .bind(input.business_type)
            .bind(&input.registration_number)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.year_established)
            .bind(input.annual_turnover)
            .fetch_one(pool)
            .await
    }

    /// Find a vendor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE id = $1");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a vendor by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors WHERE slug = $1");
        sqlx::query_as::<_, Vendor>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List vendors, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vendors ORDER BY created_at DESC");
        sqlx::query_as::<_, Vendor>(&query).fetch_all(pool).await
    }

    /// List vendors registered under a category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Vendor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM vendors v
             JOIN vendor_categories vc ON vc.vendor_id = v.id
             WHERE vc.category_id = $1
             ORDER BY v.company_name ASC"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Update a vendor. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateVendor,
    ) -> Result<Option<Vendor>, sqlx::Error> {
        let query = format!(
            "UPDATE vendors SET
                company_name = COALESCE($2, company_name),
                business_type = COALESCE($3, business_type),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                city = COALESCE($6, city),
                country = COALESCE($7, country),
                year_established = COALESCE($8, year_established),
                annual_turnover = COALESCE($9, annual_turnover),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vendor>(&query)
            .bind(id)
            .bind(&input.company_name)
            .bind(input.business_type)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.country)
            .bind(input.year_established)
            .bind(input.annual_turnover)
            .fetch_optional(pool)
            .await
    }

    /// Mark a vendor as verified.
    pub async fn verify(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE vendors SET is_verified = TRUE, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set or clear the blacklist flag.
    pub async fn set_blacklisted(
        pool: &PgPool,
        id: DbId,
        blacklisted: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE vendors SET is_blacklisted = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(blacklisted)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Replace the vendor's category set atomically.
    pub async fn set_categories(
        pool: &PgPool,
        vendor_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM vendor_categories WHERE vendor_id = $1")
            .bind(vendor_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO vendor_categories (vendor_id, category_id)
             SELECT $1, UNNEST($2::bigint[])",
        )
        .bind(vendor_id)
        .bind(category_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await
    }

    /// IDs of the categories a vendor is registered under.
    pub async fn category_ids(pool: &PgPool, vendor_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT category_id FROM vendor_categories WHERE vendor_id = $1 ORDER BY category_id",
        )
        .bind(vendor_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a vendor. Cascades to bids, contracts and clarifications.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
