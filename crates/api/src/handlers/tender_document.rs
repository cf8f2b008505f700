//! Handlers for tender documents.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::tender_document::{CreateTenderDocument, TenderDocument};
use procura_db::repositories::TenderDocumentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/tenders/{tender_id}/documents
pub async fn create(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
    Json(input): Json<CreateTenderDocument>,
) -> AppResult<(StatusCode, Json<TenderDocument>)> {
    let document = TenderDocumentRepo::create(&state.pool, tender_id, &input).await?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// GET /api/v1/tenders/{tender_id}/documents
pub async fn list(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
) -> AppResult<Json<Vec<TenderDocument>>> {
    let documents = TenderDocumentRepo::list_for_tender(&state.pool, tender_id).await?;
    Ok(Json(documents))
}

/// GET /api/v1/tender-documents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TenderDocument>> {
    let document = TenderDocumentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TenderDocument",
            id,
        }))?;
    Ok(Json(document))
}

/// DELETE /api/v1/tender-documents/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TenderDocumentRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "TenderDocument",
            id,
        }))
    }
}
