//! Handlers for the `/contracts` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::contract::{Contract, MilestoneSummary, UpdateContract};
use procura_db::models::status::ContractStatus;
use procura_db::repositories::ContractRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /contracts`.
#[derive(Debug, Deserialize)]
pub struct ContractQuery {
    pub status: Option<ContractStatus>,
}

/// Body for `POST /contracts/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: ContractStatus,
}

/// GET /api/v1/contracts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ContractQuery>,
) -> AppResult<Json<Vec<Contract>>> {
    let contracts = ContractRepo::list(&state.pool, params.status).await?;
    Ok(Json(contracts))
}

/// GET /api/v1/contracts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;
    Ok(Json(contract))
}

/// GET /api/v1/contracts/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(contract))
}

/// PUT /api/v1/contracts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateContract>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;
    Ok(Json(contract))
}

/// POST /api/v1/contracts/{id}/status
///
/// Off-path transitions are logged, not rejected.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<Contract>> {
    let current = ContractRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;

    if !current.status.is_standard_transition(input.status) {
        tracing::warn!(
            contract_id = id,
            from = current.status.as_str(),
            to = input.status.as_str(),
            "Non-standard contract status transition"
        );
    }

    let contract = ContractRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;
    Ok(Json(contract))
}

/// GET /api/v1/contracts/{id}/milestone-summary
pub async fn milestone_summary(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MilestoneSummary>>> {
    let summary = ContractRepo::milestone_summary(&state.pool, id).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// DELETE /api/v1/contracts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ContractRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))
    }
}
