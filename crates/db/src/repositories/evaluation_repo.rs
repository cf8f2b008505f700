//! Repository for the `evaluations` and `bid_evaluations` tables.

use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::evaluation::{
    BidEvaluation, CreateBidEvaluation, CreateEvaluation, Evaluation,
};

const COLUMNS: &str = "id, tender_id, evaluator_id, technical_criteria, \
    financial_criteria, notes, is_completed, evaluation_date";

const BID_EVAL_COLUMNS: &str = "id, evaluation_id, bid_id, technical_scores, \
    financial_score, total_score, remarks, recommendation, evaluated_at";

/// Provides operations for tender evaluations and their per-bid scores.
pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Open an evaluation on a tender.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEvaluation,
    ) -> Result<Evaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluations
                (tender_id, evaluator_id, technical_criteria, financial_criteria, notes)
             VALUES ($1, $2, COALESCE($3, '{{}}'::jsonb), COALESCE($4, '{{}}'::jsonb),
                     COALESCE($5, ''))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(input.tender_id)
            .bind(input.evaluator_id)
            .bind(&input.technical_criteria)
            .bind(&input.financial_criteria)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an evaluation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Evaluation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM evaluations WHERE id = $1");
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a tender's evaluations, newest first.
    pub async fn list_for_tender(
        pool: &PgPool,
        tender_id: DbId,
    ) -> Result<Vec<Evaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM evaluations
             WHERE tender_id = $1
             ORDER BY evaluation_date DESC"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// Mark an evaluation as completed, optionally replacing the notes.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        notes: Option<&str>,
    ) -> Result<Option<Evaluation>, sqlx::Error> {
        let query = format!(
            "UPDATE evaluations
             SET is_completed = TRUE, notes = COALESCE($2, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(id)
            .bind(notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete an evaluation. Cascades to its per-bid scores.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM evaluations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Score one bid within an evaluation. A second score for the same
    /// (evaluation, bid) pair fails on the unique constraint.
    pub async fn create_bid_evaluation(
        pool: &PgPool,
        evaluation_id: DbId,
        input: &CreateBidEvaluation,
    ) -> Result<BidEvaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO bid_evaluations
                (evaluation_id, bid_id, technical_scores, financial_score,
                 total_score, remarks, recommendation)
             VALUES ($1, $2, COALESCE($3, '{{}}'::jsonb), $4, $5, COALESCE($6, ''), $7)
             RETURNING {BID_EVAL_COLUMNS}"
        );
        sqlx::query_as::<_, BidEvaluation>(&query)
            .bind(evaluation_id)
            .bind(input.bid_id)
            .bind(&input.technical_scores)
            .bind(input.financial_score)
            .bind(input.total_score)
            .bind(&input.remarks)
            .bind(input.recommendation)
            .fetch_one(pool)
            .await
    }

    /// List an evaluation's per-bid scores, best total score first.
    pub async fn list_bid_evaluations(
        pool: &PgPool,
        evaluation_id: DbId,
    ) -> Result<Vec<BidEvaluation>, sqlx::Error> {
        let query = format!(
            "SELECT {BID_EVAL_COLUMNS} FROM bid_evaluations
             WHERE evaluation_id = $1
             ORDER BY total_score DESC"
        );
        sqlx::query_as::<_, BidEvaluation>(&query)
            .bind(evaluation_id)
            .fetch_all(pool)
            .await
    }
}
