//! Repository for the `clarifications` table.

use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::clarification::{Clarification, CreateClarification};

const COLUMNS: &str = "id, tender_id, vendor_id, question, answer, is_public, \
    is_answered, asked_at, answered_at";

/// Provides operations for tender clarifications.
pub struct ClarificationRepo;

impl ClarificationRepo {
    /// Record a vendor question against a tender.
    pub async fn create(
        pool: &PgPool,
        tender_id: DbId,
        input: &CreateClarification,
    ) -> Result<Clarification, sqlx::Error> {
        let query = format!(
            "INSERT INTO clarifications (tender_id, vendor_id, question, is_public)
             VALUES ($1, $2, $3, COALESCE($4, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Clarification>(&query)
            .bind(tender_id)
            .bind(input.vendor_id)
            .bind(&input.question)
            .bind(input.is_public)
            .fetch_one(pool)
            .await
    }

    /// Find a clarification by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Clarification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM clarifications WHERE id = $1");
        sqlx::query_as::<_, Clarification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a tender's clarifications, newest question first. When
    /// `public_only` is set, private questions are excluded.
    pub async fn list_for_tender(
        pool: &PgPool,
        tender_id: DbId,
        public_only: bool,
    ) -> Result<Vec<Clarification>, sqlx::Error> {
        let filter = if public_only { "AND is_public = TRUE" } else { "" };
        let query = format!(
            "SELECT {COLUMNS} FROM clarifications
             WHERE tender_id = $1 {filter}
             ORDER BY asked_at DESC"
        );
        sqlx::query_as::<_, Clarification>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// Answer a question. Sets the answer text, the answered flag and
    /// the answered timestamp in one statement, and only while the
    /// question is still unanswered; a second answer attempt returns
    /// `None`.
    pub async fn answer(
        pool: &PgPool,
        id: DbId,
        answer: &str,
    ) -> Result<Option<Clarification>, sqlx::Error> {
        let query = format!(
            "UPDATE clarifications
             SET answer = $2, is_answered = TRUE, answered_at = NOW()
             WHERE id = $1 AND is_answered = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Clarification>(&query)
            .bind(id)
            .bind(answer)
            .fetch_optional(pool)
            .await
    }

    /// Delete a clarification.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM clarifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
