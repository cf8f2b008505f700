//! Handlers for the `/bids` resource, including submission, withdrawal,
//! review transitions and evaluator scoring.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::bid::{Bid, BidScores, CreateBid, UpdateBid};
use procura_db::models::notification::CreateNotification;
use procura_db::models::status::{BidStatus, NotificationType};
use procura_db::repositories::{BidRepo, NotificationRepo, TenderRepo, VendorRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /bids/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: BidStatus,
}

/// Body for `POST /bids/bulk-status`.
#[derive(Debug, Deserialize)]
pub struct BulkStatus {
    pub ids: Vec<DbId>,
    pub status: BidStatus,
}

/// POST /api/v1/bids
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBid>,
) -> AppResult<(StatusCode, Json<Bid>)> {
    if input.bid_number.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "bid_number must not be empty".to_string(),
        )));
    }
    let bid = BidRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(bid)))
}

/// GET /api/v1/bids/{id}
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Bid>> {
    let bid = BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// GET /api/v1/tenders/{tender_id}/bids
pub async fn list_for_tender(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
) -> AppResult<Json<Vec<Bid>>> {
    let bids = BidRepo::list_for_tender(&state.pool, tender_id).await?;
    Ok(Json(bids))
}

/// PUT /api/v1/bids/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBid>,
) -> AppResult<Json<Bid>> {
    let bid = BidRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// POST /api/v1/bids/{id}/submit
///
/// Shorthand for the draft -> submitted transition. The tender's owner
/// is notified of the new submission.
pub async fn submit(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Bid>> {
    let bid = transition(&state, id, BidStatus::Submitted).await?;

    let tender = TenderRepo::find_by_id(&state.pool, bid.tender_id).await?;
    if let Some(owner) = tender.and_then(|t| t.created_by) {
        NotificationRepo::create(
            &state.pool,
            &CreateNotification {
                recipient_id: owner,
                notification_type: NotificationType::BidSubmitted,
                title: format!("Bid {} submitted", bid.bid_number),
                message: None,
                link: Some(format!("/tenders/{}/bids", bid.tender_id)),
            },
        )
        .await?;
    }

    Ok(Json(bid))
}

/// POST /api/v1/bids/{id}/withdraw
pub async fn withdraw(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Bid>> {
    let bid = transition(&state, id, BidStatus::Withdrawn).await?;
    Ok(Json(bid))
}

/// POST /api/v1/bids/{id}/status
///
/// The bidding vendor's account is notified of the change.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<Bid>> {
    let bid = transition(&state, id, input.status).await?;

    if let Some(vendor) = VendorRepo::find_by_id(&state.pool, bid.vendor_id).await? {
        NotificationRepo::create(
            &state.pool,
            &CreateNotification {
                recipient_id: vendor.user_id,
                notification_type: NotificationType::BidStatusChange,
                title: format!("Bid {} is now {}", bid.bid_number, bid.status.as_str()),
                message: None,
                link: Some(format!("/bids/{}", bid.id)),
            },
        )
        .await?;
    }

    Ok(Json(bid))
}

/// Apply one bid status transition, logging off-path moves.
async fn transition(state: &AppState, id: DbId, status: BidStatus) -> AppResult<Bid> {
    let current = BidRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;

    if !current.status.is_standard_transition(status) {
        tracing::warn!(
            bid_id = id,
            from = current.status.as_str(),
            to = status.as_str(),
            "Non-standard bid status transition"
        );
    }

    let bid = BidRepo::set_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(bid)
}

/// POST /api/v1/bids/bulk-status
pub async fn set_status_bulk(
    State(state): State<AppState>,
    Json(input): Json<BulkStatus>,
) -> AppResult<Json<DataResponse<u64>>> {
    if input.ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "ids must not be empty".to_string(),
        )));
    }
    let changed = BidRepo::set_status_bulk(&state.pool, &input.ids, input.status).await?;
    Ok(Json(DataResponse { data: changed }))
}

/// POST /api/v1/bids/{id}/scores
pub async fn record_scores(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BidScores>,
) -> AppResult<Json<Bid>> {
    let bid = BidRepo::record_scores(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Bid", id }))?;
    Ok(Json(bid))
}

/// DELETE /api/v1/bids/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BidRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Bid", id }))
    }
}
