//! Handlers for contract reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::review::{CreateReview, Review};
use procura_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/contracts/{contract_id}/review
///
/// One review per contract; recording it folds the rating into the
/// vendor's aggregate.
pub async fn create(
    State(state): State<AppState>,
    Path(contract_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    for (field, value) in [
        ("quality_rating", input.quality_rating),
        ("timeliness_rating", input.timeliness_rating),
        ("professionalism_rating", input.professionalism_rating),
    ] {
        if !(1..=5).contains(&value) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "{field} must be between 1 and 5"
            ))));
        }
    }
    let review = ReviewRepo::create(&state.pool, contract_id, &input).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/v1/contracts/{contract_id}/review
pub async fn get_for_contract(
    State(state): State<AppState>,
    Path(contract_id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_by_contract(&state.pool, contract_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: contract_id,
        }))?;
    Ok(Json(review))
}

/// DELETE /api/v1/reviews/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id,
        }))
    }
}
