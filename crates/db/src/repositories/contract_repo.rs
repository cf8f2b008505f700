//! Repository for the `contracts` table, including the award
//! transaction that flips the tender and winning bid along with the
//! contract insert.

use procura_core::slug::compound;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::contract::{AwardContract, Contract, MilestoneSummary, UpdateContract};
use crate::models::status::ContractStatus;

const COLUMNS: &str = "id, contract_number, slug, tender_id, winning_bid_id, \
    vendor_id, contract_value, currency, start_date, end_date, duration_days, \
    status, terms_and_conditions, performance_bond_amount, retention_percentage, \
    signed_by_organization, signed_by_vendor, created_at, updated_at";

/// Provides CRUD, award and aggregate operations for contracts.
pub struct ContractRepo;

impl ContractRepo {
    /// Award a tender to one of its bids.
    ///
    /// In a single transaction: the tender moves to awarded, the winning
    /// bid moves to awarded, and the contract row is inserted. The
    /// vendor and company name come from the winning bid, which must
    /// belong to the tender; `RowNotFound` is returned when it does not.
    pub async fn award(
        pool: &PgPool,
        tender_id: DbId,
        input: &AwardContract,
    ) -> Result<Contract, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let row: Option<(DbId, String)> = sqlx::query_as(
            "SELECT b.vendor_id, v.company_name
             FROM bids b
             JOIN vendors v ON v.id = b.vendor_id
             WHERE b.id = $1 AND b.tender_id = $2",
        )
        .bind(input.winning_bid_id)
        .bind(tender_id)
        .fetch_optional(&mut *tx)
        .await?;
        let (vendor_id, company_name) = row.ok_or(sqlx::Error::RowNotFound)?;

        let slug = input
            .slug
            .clone()
            .unwrap_or_else(|| compound(&[&input.contract_number, &company_name]));

        sqlx::query("UPDATE tenders SET status = 'awarded' WHERE id = $1")
            .bind(tender_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE bids SET status = 'awarded' WHERE id = $1")
            .bind(input.winning_bid_id)
            .execute(&mut *tx)
            .await?;

        let query = format!(
            "INSERT INTO contracts
                (contract_number, slug, tender_id, winning_bid_id, vendor_id,
                 contract_value, currency, start_date, end_date, duration_days,
                 terms_and_conditions, performance_bond_amount, retention_percentage)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 'USD'), $8, $9, $10,
                     COALESCE($11, ''), $12, COALESCE($13, 10.00))
             RETURNING {COLUMNS}"
        );
        let contract = sqlx::query_as::<_, Contract>(&query)
            .bind(&input.contract_number)
            .bind(&slug)
            .bind(tender_id)
            .bind(input.winning_bid_id)
            .bind(vendor_id)
            .bind(input.contract_value)
            .bind(&input.currency)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.duration_days)
            .bind(&input.terms_and_conditions)
            .bind(input.performance_bond_amount)
            .bind(input.retention_percentage)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(contract)
    }

    /// Find a contract by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a contract by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE slug = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find the contract awarded for a tender, if any.
    pub async fn find_by_tender(
        pool: &PgPool,
        tender_id: DbId,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contracts WHERE tender_id = $1");
        sqlx::query_as::<_, Contract>(&query)
            .bind(tender_id)
            .fetch_optional(pool)
            .await
    }

    /// List contracts, newest first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<ContractStatus>,
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contracts
             WHERE ($1::contract_status IS NULL OR status = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// List a vendor's contracts, newest first.
    pub async fn list_for_vendor(
        pool: &PgPool,
        vendor_id: DbId,
    ) -> Result<Vec<Contract>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contracts WHERE vendor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(vendor_id)
            .fetch_all(pool)
            .await
    }

    /// Update contract terms. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateContract,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contracts SET
                contract_value = COALESCE($2, contract_value),
                start_date = COALESCE($3, start_date),
                end_date = COALESCE($4, end_date),
                duration_days = COALESCE($5, duration_days),
                terms_and_conditions = COALESCE($6, terms_and_conditions),
                performance_bond_amount = COALESCE($7, performance_bond_amount),
                retention_percentage = COALESCE($8, retention_percentage),
                signed_by_organization = COALESCE($9, signed_by_organization),
                signed_by_vendor = COALESCE($10, signed_by_vendor),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(input.contract_value)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.duration_days)
            .bind(&input.terms_and_conditions)
            .bind(input.performance_bond_amount)
            .bind(input.retention_percentage)
            .bind(input.signed_by_organization)
            .bind(input.signed_by_vendor)
            .fetch_optional(pool)
            .await
    }

    /// Set one contract's status. Any target value is accepted.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: ContractStatus,
    ) -> Result<Option<Contract>, sqlx::Error> {
        let query = format!(
            "UPDATE contracts SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contract>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Milestone counts and total value for a contract. A contract with
    /// no milestones yields zeros.
    pub async fn milestone_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<MilestoneSummary, sqlx::Error> {
        sqlx::query_as::<_, MilestoneSummary>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'paid') AS paid,
                    COALESCE(SUM(amount), 0) AS total_amount
             FROM milestones WHERE contract_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a contract. Cascades to milestones and the review.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contracts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
