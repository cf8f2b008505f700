//! Repository for the `bids` table.

use procura_core::slug::compound;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::bid::{Bid, BidScores, CreateBid, UpdateBid};
use crate::models::status::BidStatus;

const COLUMNS: &str = "id, bid_number, slug, tender_id, vendor_id, bid_amount, \
    currency, technical_proposal, financial_proposal, delivery_timeline_days, \
    status, technical_score, financial_score, total_score, evaluator_comments, \
    submitted_at, reviewed_at, created_at, updated_at";

/// Provides CRUD and lifecycle operations for bids.
pub struct BidRepo;

impl BidRepo {
    /// Insert a new draft bid, returning the created row.
    ///
    /// When `slug` is omitted it becomes
    /// `slugify(company_name-tender_number-bid_number)`, resolved from
    /// the referenced vendor and tender. A second bid for the same
    /// (tender, vendor) pair fails on the unique constraint.
    pub async fn create(pool: &PgPool, input: &CreateBid) -> Result<Bid, sqlx::Error> {
        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => {
                let (company_name, tender_number): (String, String) = sqlx::query_as(
                    "SELECT v.company_name, t.tender_number
                     FROM vendors v, tenders t
                     WHERE v.id = $1 AND t.id = $2",
                )
                .bind(input.vendor_id)
                .bind(input.tender_id)
                .fetch_one(pool)
                .await?;
                compound(&[&company_name, &tender_number, &input.bid_number])
            }
        };

        let query = format!(
            "INSERT INTO bids
                (bid_number, slug, tender_id, vendor_id, bid_amount, currency,
                 technical_proposal, financial_proposal, delivery_timeline_days)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 'USD'),
                     COALESCE($7, ''), COALESCE($8, ''), COALESCE($9, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(&input.bid_number)
            .bind(&slug)
            .bind(input.tender_id)
            .bind(input.vendor_id)
            .bind(input.bid_amount)
            .bind(&input.currency)
            .bind(&input.technical_proposal)
            .bind(&input.financial_proposal)
            .bind(input.delivery_timeline_days)
            .fetch_one(pool)
            .await
    }

    /// Find a bid by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bids WHERE id = $1");
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a bid by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bids WHERE slug = $1");
        sqlx::query_as::<_, Bid>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List a tender's bids, most recently submitted first; drafts
    /// (null `submitted_at`) sort last.
    pub async fn list_for_tender(pool: &PgPool, tender_id: DbId) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bids
             WHERE tender_id = $1
             ORDER BY submitted_at DESC NULLS LAST, created_at DESC"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// List a vendor's bids, newest first.
    pub async fn list_for_vendor(pool: &PgPool, vendor_id: DbId) -> Result<Vec<Bid>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bids WHERE vendor_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(vendor_id)
            .fetch_all(pool)
            .await
    }

    /// Update a bid's proposal fields. Only non-`None` fields are
    /// applied. `reviewed_at` is recorded here explicitly; no status
    /// transition writes it.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBid,
    ) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!(
            "UPDATE bids SET
                bid_amount = COALESCE($2, bid_amount),
                technical_proposal = COALESCE($3, technical_proposal),
                financial_proposal = COALESCE($4, financial_proposal),
                delivery_timeline_days = COALESCE($5, delivery_timeline_days),
                reviewed_at = COALESCE($6, reviewed_at),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .bind(input.bid_amount)
            .bind(&input.technical_proposal)
            .bind(&input.financial_proposal)
            .bind(input.delivery_timeline_days)
            .bind(input.reviewed_at)
            .fetch_optional(pool)
            .await
    }

    /// Set one bid's status. The transition to submitted stamps
    /// `submitted_at`, only while still null so the first transition
    /// wins. No other transition stamps anything; `reviewed_at` is set
    /// manually through [`BidRepo::update`].
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: BidStatus,
    ) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!(
            "UPDATE bids SET
                status = $2,
                submitted_at = CASE
                    WHEN $2 = 'submitted'::bid_status AND submitted_at IS NULL
                    THEN NOW() ELSE submitted_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Bulk administrative status update. Touches nothing but the status
    /// column; returns the number of rows updated.
    pub async fn set_status_bulk(
        pool: &PgPool,
        ids: &[DbId],
        status: BidStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE bids SET status = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Record evaluator scores on a bid.
    pub async fn record_scores(
        pool: &PgPool,
        id: DbId,
        scores: &BidScores,
    ) -> Result<Option<Bid>, sqlx::Error> {
        let query = format!(
            "UPDATE bids SET
                technical_score = $2,
                financial_score = $3,
                total_score = $4,
                evaluator_comments = COALESCE($5, evaluator_comments),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Bid>(&query)
            .bind(id)
            .bind(scores.technical_score)
            .bind(scores.financial_score)
            .bind(scores.total_score)
            .bind(&scores.evaluator_comments)
            .fetch_optional(pool)
            .await
    }

    /// Delete a bid. Cascades to its documents.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bids WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
