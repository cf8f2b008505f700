//! Handlers for bid documents.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::bid_document::{BidDocument, CreateBidDocument};
use procura_db::repositories::BidDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/bids/{bid_id}/documents
pub async fn create(
    State(state): State<AppState>,
    Path(bid_id): Path<DbId>,
    Json(input): Json<CreateBidDocument>,
) -> AppResult<(StatusCode, Json<BidDocument>)> {
    let document = BidDocumentRepo::create(&state.pool, bid_id, &input).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/bids/{bid_id}/documents
pub async fn list(
    State(state): State<AppState>,
    Path(bid_id): Path<DbId>,
) -> AppResult<Json<Vec<BidDocument>>> {
    let documents = BidDocumentRepo::list_for_bid(&state.pool, bid_id).await?;
    Ok(Json(documents))
}

/// DELETE /api/v1/bid-documents/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BidDocumentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "BidDocument",
            id,
        }))
    }
}
