//! Repository for the `tender_amendments` table.
//!
//! Amendments are immutable once published, so only create, read and
//! delete exist.

use procura_core::slug::compound;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::amendment::{Amendment, CreateAmendment};

const COLUMNS: &str = "id, tender_id, amendment_number, slug, title, description, \
    affects_submission_deadline, new_submission_deadline, affects_estimated_value, \
    new_estimated_value, published_at";

/// Provides operations for tender amendments.
pub struct AmendmentRepo;

impl AmendmentRepo {
    /// Publish an amendment against a tender, returning the created row.
    ///
    /// The slug defaults to `slugify(tender_number-amendment_number)`;
    /// the tender number is resolved from the referenced tender.
    pub async fn create(
        pool: &PgPool,
        tender_id: DbId,
        input: &CreateAmendment,
    ) -> Result<Amendment, sqlx::Error> {
        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => {
                let tender_number: String =
                    sqlx::query_scalar("SELECT tender_number FROM tenders WHERE id = $1")
                        .bind(tender_id)
                        .fetch_one(pool)
                        .await?;
                compound(&[&tender_number, &input.amendment_number])
            }
        };

        let query = format!(
            "INSERT INTO tender_amendments
                (tender_id, amendment_number, slug, title, description,
                 affects_submission_deadline, new_submission_deadline,
                 affects_estimated_value, new_estimated_value)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''),
                     COALESCE($6, FALSE), $7, COALESCE($8, FALSE), $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Amendment>(&query)
            .bind(tender_id)
            .bind(&input.amendment_number)
            .bind(&slug)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.affects_submission_deadline)
            .bind(input.new_submission_deadline)
            .bind(input.affects_estimated_value)
            .bind(input.new_estimated_value)
            .fetch_one(pool)
            .await
    }

    /// Find an amendment by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Amendment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tender_amendments WHERE id = $1");
        sqlx::query_as::<_, Amendment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a tender's amendments, newest first.
    pub async fn list_for_tender(
        pool: &PgPool,
        tender_id: DbId,
    ) -> Result<Vec<Amendment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tender_amendments
             WHERE tender_id = $1
             ORDER BY published_at DESC"
        );
        sqlx::query_as::<_, Amendment>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an amendment record.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tender_amendments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
