//! Handlers for contract milestones, including the even payment plan
//! generator.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::milestone::{CreateMilestone, Milestone, UpdateMilestone};
use procura_db::models::status::MilestoneStatus;
use procura_db::repositories::MilestoneRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /contracts/{id}/milestones/plan`.
#[derive(Debug, Deserialize)]
pub struct CreatePlan {
    pub count: u32,
}

/// Body for `POST /milestones/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: MilestoneStatus,
}

/// POST /api/v1/contracts/{contract_id}/milestones
pub async fn create(
    State(state): State<AppState>,
    Path(contract_id): Path<DbId>,
    Json(input): Json<CreateMilestone>,
) -> AppResult<(StatusCode, Json<Milestone>)> {
    if input.sequence_number < 1 {
        return Err(AppError::Core(CoreError::Validation(
            "sequence_number must be positive".to_string(),
        )));
    }
    let milestone = MilestoneRepo::create(&state.pool, contract_id, &input).await?;
    Ok((StatusCode::CREATED, Json(milestone)))
}

/// POST /api/v1/contracts/{contract_id}/milestones/plan
///
/// Generate an even payment plan over the contract value and duration.
pub async fn create_plan(
    State(state): State<AppState>,
    Path(contract_id): Path<DbId>,
    Json(input): Json<CreatePlan>,
) -> AppResult<(StatusCode, Json<Vec<Milestone>>)> {
    if input.count == 0 {
        return Err(AppError::Core(CoreError::Validation(
            "count must be at least 1".to_string(),
        )));
    }
    let plan = MilestoneRepo::create_plan(&state.pool, contract_id, input.count).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/contracts/{contract_id}/milestones
pub async fn list_for_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<DbId>,
) -> AppResult<Json<Vec<Milestone>>> {
    let milestones = MilestoneRepo::list_for_contract(&state.pool, contract_id).await?;
    Ok(Json(milestones))
}

/// GET /api/v1/milestones/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Milestone>> {
    let milestone = MilestoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;
    Ok(Json(milestone))
}

/// PUT /api/v1/milestones/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMilestone>,
) -> AppResult<Json<Milestone>> {
    let milestone = MilestoneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;
    Ok(Json(milestone))
}

/// POST /api/v1/milestones/{id}/status
///
/// Off-path transitions are logged, not rejected. Completed and paid
/// stamp their dates when still unset.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<Milestone>> {
    let current = MilestoneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;

    if !current.status.is_standard_transition(input.status) {
        tracing::warn!(
            milestone_id = id,
            from = current.status.as_str(),
            to = input.status.as_str(),
            "Non-standard milestone status transition"
        );
    }

    let milestone = MilestoneRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))?;
    Ok(Json(milestone))
}

/// DELETE /api/v1/milestones/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MilestoneRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Milestone",
            id,
        }))
    }
}
