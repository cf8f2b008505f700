//! Handlers for tender amendments.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::amendment::{Amendment, CreateAmendment};
use procura_db::repositories::AmendmentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/tenders/{tender_id}/amendments
pub async fn create(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
    Json(input): Json<CreateAmendment>,
) -> AppResult<(StatusCode, Json<Amendment>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    let amendment = AmendmentRepo::create(&state.pool, tender_id, &input).await?;
    Ok((StatusCode::CREATED, Json(amendment)))
}

/// GET /api/v1/tenders/{tender_id}/amendments
pub async fn list(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
) -> AppResult<Json<Vec<Amendment>>> {
    let amendments = AmendmentRepo::list_for_tender(&state.pool, tender_id).await?;
    Ok(Json(amendments))
}

/// GET /api/v1/amendments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Amendment>> {
    let amendment = AmendmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Amendment",
            id,
        }))?;
    Ok(Json(amendment))
}

/// DELETE /api/v1/amendments/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AmendmentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Amendment",
            id,
        }))
    }
}
