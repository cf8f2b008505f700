//! Repository for the `milestones` table.

use chrono::Days;
use procura_core::milestone::even_split;
use procura_core::slug::slugify;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};
use crate::models::status::MilestoneStatus;

const COLUMNS: &str = "id, contract_id, title, slug, description, sequence_number, \
    deliverables, amount, percentage_of_total, due_date, completion_date, \
    payment_date, status, created_at, updated_at";

/// Provides CRUD, lifecycle and payment-plan operations for milestones.
pub struct MilestoneRepo;

impl MilestoneRepo {
    /// Insert a milestone under a contract, returning the created row.
    ///
    /// When `slug` is omitted it becomes
    /// `slugify(contract_number)-milestone-{sequence_number}`. A second
    /// milestone with the same sequence number fails on the unique
    /// constraint.
    pub async fn create(
        pool: &PgPool,
        contract_id: DbId,
        input: &CreateMilestone,
    ) -> Result<Milestone, sqlx::Error> {
        let slug = match &input.slug {
            Some(slug) => slug.clone(),
            None => {
                let contract_number: String =
                    sqlx::query_scalar("SELECT contract_number FROM contracts WHERE id = $1")
                        .bind(contract_id)
                        .fetch_one(pool)
                        .await?;
                format!(
                    "{}-milestone-{}",
                    slugify(&contract_number),
                    input.sequence_number
                )
            }
        };

        let query = format!(
            "INSERT INTO milestones
                (contract_id, title, slug, description, sequence_number,
                 deliverables, amount, percentage_of_total, due_date)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, COALESCE($6, ''), $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(contract_id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(input.sequence_number)
            .bind(&input.deliverables)
            .bind(input.amount)
            .bind(input.percentage_of_total)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Generate an even payment plan of `count` milestones for a
    /// contract, in one transaction.
    ///
    /// The contract value is split into even shares with the rounding
    /// remainder folded into the last milestone. Due dates spread the
    /// contract duration evenly, with the last milestone due on the end
    /// date. Returns `RowNotFound` for a missing contract; `count` must
    /// be validated as nonzero by the caller.
    pub async fn create_plan(
        pool: &PgPool,
        contract_id: DbId,
        count: u32,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let contract: (String, rust_decimal::Decimal, chrono::NaiveDate, chrono::NaiveDate, i32) =
            sqlx::query_as(
                "SELECT contract_number, contract_value, start_date, end_date, duration_days
                 FROM contracts WHERE id = $1",
            )
            .bind(contract_id)
            .fetch_one(&mut *tx)
            .await?;
        let (contract_number, contract_value, start_date, end_date, duration_days) = contract;

        let shares = even_split(contract_value, count);
        let step = duration_days.max(0) as u64 / count.max(1) as u64;
        let contract_slug = slugify(&contract_number);

        let query = format!(
            "INSERT INTO milestones
                (contract_id, title, slug, sequence_number, amount,
                 percentage_of_total, due_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );

        let mut milestones = Vec::with_capacity(shares.len());
        for (i, share) in shares.iter().enumerate() {
            let sequence = (i + 1) as i32;
            let due_date = if i + 1 == shares.len() {
                end_date
            } else {
                start_date
                    .checked_add_days(Days::new(step * (i as u64 + 1)))
                    .unwrap_or(end_date)
            };

            let milestone = sqlx::query_as::<_, Milestone>(&query)
                .bind(contract_id)
                .bind(format!("Milestone {sequence}"))
                .bind(format!("{contract_slug}-milestone-{sequence}"))
                .bind(sequence)
                .bind(share.amount)
                .bind(share.percentage)
                .bind(due_date)
                .fetch_one(&mut *tx)
                .await?;
            milestones.push(milestone);
        }

        tx.commit().await?;
        Ok(milestones)
    }

    /// Find a milestone by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM milestones WHERE id = $1");
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a contract's milestones in sequence order.
    pub async fn list_for_contract(
        pool: &PgPool,
        contract_id: DbId,
    ) -> Result<Vec<Milestone>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM milestones
             WHERE contract_id = $1
             ORDER BY sequence_number ASC"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(contract_id)
            .fetch_all(pool)
            .await
    }

    /// Update a milestone. Only non-`None` fields are applied; the
    /// completion and payment dates may be recorded manually here.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMilestone,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                deliverables = COALESCE($4, deliverables),
                amount = COALESCE($5, amount),
                percentage_of_total = COALESCE($6, percentage_of_total),
                due_date = COALESCE($7, due_date),
                completion_date = COALESCE($8, completion_date),
                payment_date = COALESCE($9, payment_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.deliverables)
            .bind(input.amount)
            .bind(input.percentage_of_total)
            .bind(input.due_date)
            .bind(input.completion_date)
            .bind(input.payment_date)
            .fetch_optional(pool)
            .await
    }

    /// Set one milestone's status. The transition to completed stamps
    /// `completion_date` and the transition to paid stamps
    /// `payment_date`, each only while still null so manually recorded
    /// dates survive.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: MilestoneStatus,
    ) -> Result<Option<Milestone>, sqlx::Error> {
        let query = format!(
            "UPDATE milestones SET
                status = $2,
                completion_date = CASE
                    WHEN $2 = 'completed'::milestone_status AND completion_date IS NULL
                    THEN CURRENT_DATE ELSE completion_date END,
                payment_date = CASE
                    WHEN $2 = 'paid'::milestone_status AND payment_date IS NULL
                    THEN CURRENT_DATE ELSE payment_date END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Milestone>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a milestone.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM milestones WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
