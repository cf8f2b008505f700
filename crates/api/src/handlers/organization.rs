//! Handlers for the `/organizations` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::organization::{CreateOrganization, Organization, UpdateOrganization};
use procura_db::repositories::OrganizationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /organizations`.
#[derive(Debug, Deserialize)]
pub struct OrganizationQuery {
    /// If `true`, return only verified organizations. Defaults to `false`.
    pub verified_only: Option<bool>,
}

/// POST /api/v1/organizations
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateOrganization>,
) -> AppResult<(StatusCode, Json<Organization>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "name must not be empty".to_string(),
        )));
    }
    let organization = OrganizationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(organization)))
}

/// GET /api/v1/organizations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OrganizationQuery>,
) -> AppResult<Json<Vec<Organization>>> {
    let organizations =
        OrganizationRepo::list(&state.pool, params.verified_only.unwrap_or(false)).await?;
    Ok(Json(organizations))
}

/// GET /api/v1/organizations/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Organization>> {
    let organization = OrganizationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(Json(organization))
}

/// GET /api/v1/organizations/slug/{slug}
pub async fn get_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Organization>> {
    let organization = OrganizationRepo::find_by_slug(&state.pool, &slug)
        .await?
        .ok_or(AppError::Database(sqlx::Error::RowNotFound))?;
    Ok(Json(organization))
}

/// PUT /api/v1/organizations/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrganization>,
) -> AppResult<Json<Organization>> {
    let organization = OrganizationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))?;
    Ok(Json(organization))
}

/// POST /api/v1/organizations/{id}/verify
pub async fn verify(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let found = OrganizationRepo::verify(&state.pool, id).await?;
    if found {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))
    }
}

/// GET /api/v1/organizations/{id}/tender-count
pub async fn tender_count(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<i64>>> {
    let count = OrganizationRepo::tender_count(&state.pool, id).await?;
    Ok(Json(DataResponse { data: count }))
}

/// DELETE /api/v1/organizations/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = OrganizationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Organization",
            id,
        }))
    }
}
