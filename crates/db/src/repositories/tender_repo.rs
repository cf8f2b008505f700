//! Repository for the `tenders` table.

use procura_core::slug::slugify;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::status::TenderStatus;
use crate::models::tender::{BidStatistics, CreateTender, Tender, TenderFilter, UpdateTender};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, tender_number, slug, title, organization_id, category_id, \
    description, detailed_requirements, status, procurement_method, estimated_value, \
    currency, bid_security_amount, publication_date, submission_deadline, opening_date, \
    expected_award_date, project_location, project_country, is_featured, created_by, \
    created_at, updated_at";

/// Provides CRUD and lifecycle operations for tenders.
pub struct TenderRepo;

impl TenderRepo {
    /// Insert a new tender, returning the created row.
    ///
    /// When `slug` is omitted it becomes
    /// `slugify(title)-lowercase(tender_number)`, computed once at
    /// creation and never recomputed.
    pub async fn create(pool: &PgPool, input: &CreateTender) -> Result<Tender, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| {
            format!("{}-{}", slugify(&input.title), input.tender_number.to_lowercase())
        });

        let query = format!(
            "INSERT INTO tenders
                (tender_number, slug, title, organization_id, category_id,
                 description, detailed_requirements, status, procurement_method,
                 estimated_value, currency, bid_security_amount, publication_date,
                 submission_deadline, opening_date, expected_award_date,
                 project_location, project_country, created_by)
             VALUES ($1, $2, $3, $4, $5,
                     COALESCE($6, ''), COALESCE($7, ''), COALESCE($8, 'draft'), $9,
                     $10, COALESCE($11, 'USD'), $12, $13,
                     $14, $15, $16,
                     COALESCE($17, ''), COALESCE($18, ''), $19)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tender>(&query)
            .bind(&input.tender_number)
            .bind(&slug)
            .bind(&input.title)
            .bind(input.organization_id)
            .bind(input.category_id)
            .bind(&input.description)
            .bind(&input.detailed_requirements)
            .bind(input.status)
            .bind(input.procurement_method)
            .bind(input.estimated_value)
            .bind(&input.currency)
            .bind(input.bid_security_amount)
            .bind(input.publication_date)
            .bind(input.submission_deadline)
            .bind(input.opening_date)
            .bind(input.expected_award_date)
            .bind(&input.project_location)
            .bind(&input.project_country)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a tender by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tender>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenders WHERE id = $1");
        sqlx::query_as::<_, Tender>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tender by slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Tender>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tenders WHERE slug = $1");
        sqlx::query_as::<_, Tender>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List tenders newest-published first, with optional status,
    /// organization, category and keyword filters.
    pub async fn list(pool: &PgPool, filter: &TenderFilter) -> Result<Vec<Tender>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tenders
             WHERE ($1::tender_status IS NULL OR status = $1)
               AND ($2::bigint IS NULL OR organization_id = $2)
               AND ($3::bigint IS NULL OR category_id = $3)
               AND ($4::text IS NULL
                    OR title ILIKE '%' || $4 || '%'
                    OR tender_number ILIKE '%' || $4 || '%')
             ORDER BY publication_date DESC"
        );
        sqlx::query_as::<_, Tender>(&query)
            .bind(filter.status)
            .bind(filter.organization_id)
            .bind(filter.category_id)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Update a tender. Only non-`None` fields are applied; slug, tender
    /// number and status are untouched here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTender,
    ) -> Result<Option<Tender>, sqlx::Error> {
        let query = format!(
            "UPDATE tenders SET
                title = COALESCE($2, title),
                category_id = COALESCE($3, category_id),
                description = COALESCE($4, description),
                detailed_requirements = COALESCE($5, detailed_requirements),
                procurement_method = COALESCE($6, procurement_method),
                estimated_value = COALESCE($7, estimated_value),
                bid_security_amount = COALESCE($8, bid_security_amount),
                submission_deadline = COALESCE($9, submission_deadline),
                opening_date = COALESCE($10, opening_date),
                expected_award_date = COALESCE($11, expected_award_date),
                project_location = COALESCE($12, project_location),
                project_country = COALESCE($13, project_country),
                is_featured = COALESCE($14, is_featured),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tender>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.category_id)
            .bind(&input.description)
            .bind(&input.detailed_requirements)
            .bind(input.procurement_method)
            .bind(input.estimated_value)
            .bind(input.bid_security_amount)
            .bind(input.submission_deadline)
            .bind(input.opening_date)
            .bind(input.expected_award_date)
            .bind(&input.project_location)
            .bind(&input.project_country)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Set one tender's status. Any target value is accepted; the
    /// storage layer does not police transitions.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: TenderStatus,
    ) -> Result<Option<Tender>, sqlx::Error> {
        let query = format!(
            "UPDATE tenders SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tender>(&query)
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
        status: TenderStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE tenders SET status = $2 WHERE id = ANY($1)")
            .bind(ids)
            .bind(status)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Per-status bid counts for a tender.
    pub async fn bid_statistics(pool: &PgPool, id: DbId) -> Result<BidStatistics, sqlx::Error> {
        sqlx::query_as::<_, BidStatistics>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'submitted') AS submitted,
                    COUNT(*) FILTER (WHERE status = 'under_review') AS under_review,
                    COUNT(*) FILTER (WHERE status = 'awarded') AS awarded
             FROM bids WHERE tender_id = $1",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Delete a tender. Cascades to documents, amendments,
    /// clarifications, bids and the contract.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tenders WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

}
