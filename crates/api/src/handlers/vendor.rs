//! Handlers for the `/vendors` resource, including the administrative
//! verification and blacklist toggles.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::bid::Bid;
use procura_db::models::contract::Contract;
use procura_db::models::review::Review;
use procura_db::models::vendor::{CreateVendor, UpdateVendor, Vendor};
use procura_db::repositories::{BidRepo, ContractRepo, ReviewRepo, VendorRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for `PUT /vendors/{id}/categories`.
#[derive(Debug, Deserialize)]
pub struct SetCategories {
    pub category_ids: Vec<DbId>,
}

/// POST /api/v1/vendors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVendor>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    if input.company_name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "company_name must not be empty".to_string(),
        )));
    }
    let vendor = VendorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// GET /api/v1/vendors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Vendor>>> {
    let vendors = VendorRepo::list(&state.pool).await?;
    Ok(Json(vendors))
}

/// GET /api/v1/vendors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vendor>> {
    let vendor = VendorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;
    Ok(Json(vendor))
}

/// GET /api/v1/vendors/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Vendor>> {
    let vendor = VendorRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(vendor))
}

/// PUT /api/v1/vendors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVendor>,
) -> AppResult<Json<Vendor>> {
    let vendor = VendorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;
    Ok(Json(vendor))
}

/// POST /api/v1/vendors/{id}/verify
pub async fn verify(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let found = VendorRepo::verify(&state.pool, id).await?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))
    }
}

/// POST /api/v1/vendors/{id}/blacklist
pub async fn blacklist(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    set_blacklisted(&state, id, true).await
}

/// DELETE /api/v1/vendors/{id}/blacklist
pub async fn unblacklist(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    set_blacklisted(&state, id, false).await
}

async fn set_blacklisted(state: &AppState, id: DbId, blacklisted: bool) -> AppResult<StatusCode> {
    let found = VendorRepo::set_blacklisted(&state.pool, id, blacklisted).await?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))
    }
}

/// PUT /api/v1/vendors/{id}/categories
///
/// Replace the vendor's category registrations.
pub async fn set_categories(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCategories>,
) -> AppResult<Json<DataResponse<Vec<DbId>>>> {
    // Surface a 404 rather than silently writing links for a missing row.
    VendorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))?;

    VendorRepo::set_categories(&state.pool, id, &input.category_ids).await?;
    let current = VendorRepo::category_ids(&state.pool, id).await?;
    Ok(Json(DataResponse { data: current }))
}

/// GET /api/v1/vendors/{id}/categories
pub async fn categories(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<DbId>>>> {
    let ids = VendorRepo::category_ids(&state.pool, id).await?;
    Ok(Json(DataResponse { data: ids }))
}

/// GET /api/v1/vendors/{id}/bids
pub async fn bids(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Bid>>> {
    let bids = BidRepo::list_for_vendor(&state.pool, id).await?;
    Ok(Json(bids))
}

/// GET /api/v1/vendors/{id}/contracts
pub async fn contracts(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Contract>>> {
    let contracts = ContractRepo::list_for_vendor(&state.pool, id).await?;
    Ok(Json(contracts))
}

/// GET /api/v1/vendors/{id}/reviews
pub async fn reviews(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_for_vendor(&state.pool, id).await?;
    Ok(Json(reviews))
}

/// DELETE /api/v1/vendors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = VendorRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vendor",
            id,
        }))
    }
}
