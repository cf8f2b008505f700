//! Repository for the `reviews` table.

use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

const COLUMNS: &str = "id, contract_id, reviewer_id, quality_rating, \
    timeliness_rating, professionalism_rating, overall_rating, comment, \
    would_work_again, created_at";

/// Provides operations for contract reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Review a completed contract and fold the rating into the
    /// vendor's aggregate, in one transaction.
    ///
    /// A second review for the same contract fails on the unique
    /// constraint. The vendor's `rating` becomes the average overall
    /// rating across all of its contracts' reviews, and `total_reviews`
    /// the count.
    pub async fn create(
        pool: &PgPool,
        contract_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO reviews
                (contract_id, reviewer_id, quality_rating, timeliness_rating,
                 professionalism_rating, overall_rating, comment, would_work_again)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''), $8)
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(contract_id)
            .bind(input.reviewer_id)
            .bind(input.quality_rating)
            .bind(input.timeliness_rating)
            .bind(input.professionalism_rating)
            .bind(input.overall_rating)
            .bind(&input.comment)
            .bind(input.would_work_again)
            .fetch_one(&mut *tx)
            .await?;

        sqlx::query(
            "UPDATE vendors v SET
                rating = agg.avg_rating,
                total_reviews = agg.review_count,
                updated_at = NOW()
             FROM (SELECT ROUND(AVG(r.overall_rating), 2) AS avg_rating,
                          COUNT(*)::int AS review_count
                   FROM reviews r
                   JOIN contracts c ON c.id = r.contract_id
                   WHERE c.vendor_id = (SELECT vendor_id FROM contracts WHERE id = $1)
                  ) agg
             WHERE v.id = (SELECT vendor_id FROM contracts WHERE id = $1)",
        )
        .bind(contract_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(review)
    }

    /// Find a review by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The review recorded for a contract, if any.
    pub async fn find_by_contract(
        pool: &PgPool,
        contract_id: DbId,
    ) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE contract_id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(contract_id)
            .fetch_optional(pool)
            .await
    }

    /// List the reviews across a vendor's contracts, newest first.
    pub async fn list_for_vendor(
        pool: &PgPool,
        vendor_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE contract_id IN (SELECT id FROM contracts WHERE vendor_id = $1)
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(vendor_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a review. The vendor aggregate is not recomputed here.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
