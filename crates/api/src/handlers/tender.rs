//! Handlers for the `/tenders` resource, including status transitions
//! and the award operation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::contract::{AwardContract, Contract};
use procura_db::models::notification::CreateNotification;
use procura_db::models::status::{NotificationType, TenderStatus};
use procura_db::models::tender::{BidStatistics, CreateTender, Tender, TenderFilter, UpdateTender};
use procura_db::repositories::{ContractRepo, NotificationRepo, TenderRepo, VendorRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `POST /tenders/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct SetStatus {
    pub status: TenderStatus,
}

/// Body for `POST /tenders/bulk-status`.
#[derive(Debug, Deserialize)]
pub struct BulkStatus {
    pub ids: Vec<DbId>,
    pub status: TenderStatus,
}

/// POST /api/v1/tenders
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTender>,
) -> AppResult<(StatusCode, Json<Tender>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be empty".to_string(),
        )));
    }
    if input.submission_deadline <= input.publication_date {
        return Err(AppError::Core(CoreError::Validation(
            "submission_deadline must be after publication_date".to_string(),
        )));
    }
    let tender = TenderRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tender)))
}

/// GET /api/v1/tenders
///
/// Supports `status`, `organization_id`, `category_id` and `search`
/// query parameters, all optional.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<TenderFilter>,
) -> AppResult<Json<Vec<Tender>>> {
    let tenders = TenderRepo::list(&state.pool, &filter).await?;
    Ok(Json(tenders))
}

/// GET /api/v1/tenders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tender>> {
    let tender = TenderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;
    Ok(Json(tender))
}

/// GET /api/v1/tenders/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Tender>> {
    let tender = TenderRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(tender))
}

/// PUT /api/v1/tenders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTender>,
) -> AppResult<Json<Tender>> {
    let tender = TenderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;
    Ok(Json(tender))
}

/// POST /api/v1/tenders/{id}/status
///
/// Any transition is applied; off-path transitions are logged, not
/// rejected, so administrative corrections always go through.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetStatus>,
) -> AppResult<Json<Tender>> {
    let current = TenderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;

    if !current.status.is_standard_transition(input.status) {
        tracing::warn!(
            tender_id = id,
            from = current.status.as_str(),
            to = input.status.as_str(),
            "Non-standard tender status transition"
        );
    }

    let tender = TenderRepo::set_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))?;
    Ok(Json(tender))
}

/// POST /api/v1/tenders/bulk-status
///
/// Administrative bulk update. Returns the number of tenders changed.
pub async fn set_status_bulk(
    State(state): State<AppState>,
    Json(input): Json<BulkStatus>,
) -> AppResult<Json<DataResponse<u64>>> {
    if input.ids.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "ids must not be empty".to_string(),
        )));
    }
    let changed = TenderRepo::set_status_bulk(&state.pool, &input.ids, input.status).await?;
    Ok(Json(DataResponse { data: changed }))
}

/// GET /api/v1/tenders/{id}/bid-statistics
pub async fn bid_statistics(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BidStatistics>>> {
    let stats = TenderRepo::bid_statistics(&state.pool, id).await?;
    Ok(Json(DataResponse { data: stats }))
}

/// POST /api/v1/tenders/{id}/award
///
/// Single transaction: the tender moves to awarded, the winning bid
/// moves to awarded, and the contract is created. The winning vendor's
/// account is notified afterwards.
pub async fn award(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AwardContract>,
) -> AppResult<(StatusCode, Json<Contract>)> {
    if input.end_date <= input.start_date {
        return Err(AppError::Core(CoreError::Validation(
            "end_date must be after start_date".to_string(),
        )));
    }

    let contract = ContractRepo::award(&state.pool, id, &input).await?;

    if let Some(vendor) = VendorRepo::find_by_id(&state.pool, contract.vendor_id).await? {
        NotificationRepo::create(
            &state.pool,
            &CreateNotification {
                recipient_id: vendor.user_id,
                notification_type: NotificationType::ContractAwarded,
                title: format!("Contract {} awarded", contract.contract_number),
                message: Some(format!(
                    "Your bid was selected for tender {}",
                    contract.tender_id
                )),
                link: Some(format!("/contracts/{}", contract.id)),
            },
        )
        .await?;
    }

    Ok((StatusCode::CREATED, Json(contract)))
}

/// GET /api/v1/tenders/{id}/contract
pub async fn contract(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Contract>> {
    let contract = ContractRepo::find_by_tender(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Contract",
            id,
        }))?;
    Ok(Json(contract))
}

/// DELETE /api/v1/tenders/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TenderRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Tender",
            id,
        }))
    }
}
