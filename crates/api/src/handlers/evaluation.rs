//! Handlers for tender evaluations and their per-bid scores.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::evaluation::{
    BidEvaluation, CreateBidEvaluation, CreateEvaluation, Evaluation,
};
use procura_db::repositories::EvaluationRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /evaluations/{id}/complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteEvaluation {
    pub notes: Option<String>,
}

/// POST /api/v1/evaluations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEvaluation>,
) -> AppResult<(StatusCode, Json<Evaluation>)> {
    let evaluation = EvaluationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(evaluation)))
}

/// GET /api/v1/evaluations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Evaluation>> {
    let evaluation = EvaluationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Evaluation",
            id,
        }))?;
    Ok(Json(evaluation))
}

/// GET /api/v1/tenders/{tender_id}/evaluations
pub async fn list_for_tender(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
) -> AppResult<Json<Vec<Evaluation>>> {
    let evaluations = EvaluationRepo::list_for_tender(&state.pool, tender_id).await?;
    Ok(Json(evaluations))
}

/// POST /api/v1/evaluations/{id}/complete
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CompleteEvaluation>,
) -> AppResult<Json<Evaluation>> {
    let evaluation = EvaluationRepo::complete(&state.pool, id, input.notes.as_deref())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Evaluation",
            id,
        }))?;
    Ok(Json(evaluation))
}

/// POST /api/v1/evaluations/{id}/bid-evaluations
pub async fn create_bid_evaluation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateBidEvaluation>,
) -> AppResult<(StatusCode, Json<BidEvaluation>)> {
    let bid_evaluation = EvaluationRepo::create_bid_evaluation(&state.pool, id, &input).await?;
    Ok((StatusCode::CREATED, Json(bid_evaluation)))
}

/// GET /api/v1/evaluations/{id}/bid-evaluations
///
/// Scores come back best first.
pub async fn list_bid_evaluations(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<BidEvaluation>>> {
    let scores = EvaluationRepo::list_bid_evaluations(&state.pool, id).await?;
    Ok(Json(scores))
}

/// DELETE /api/v1/evaluations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = EvaluationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Evaluation",
            id,
        }))
    }
}
