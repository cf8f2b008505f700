//! Handlers for the `/notifications` resource.
//!
//! Notifications are per-user rows; listing and bulk reads are scoped
//! under `/users/{user_id}/notifications`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::notification::{CreateNotification, Notification};
use procura_db::repositories::NotificationRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /users/{user_id}/notifications`.
#[derive(Debug, Deserialize)]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
    /// Maximum number of results. Defaults to 50, capped at 100.
    pub limit: Option<i64>,
    /// Number of results to skip. Defaults to 0.
    pub offset: Option<i64>,
}

/// Maximum page size for notification listing.
const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
const DEFAULT_LIMIT: i64 = 50;

/// POST /api/v1/notifications
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    let notification = NotificationRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(notification)))
}

/// GET /api/v1/users/{user_id}/notifications
pub async fn list(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Query(params): Query<NotificationQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let offset = params.offset.unwrap_or(0);
    let unread_only = params.unread_only.unwrap_or(false);

    let notifications =
        NotificationRepo::list_for_recipient(&state.pool, user_id, unread_only, limit, offset)
            .await?;
    Ok(Json(notifications))
}

/// GET /api/v1/users/{user_id}/notifications/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<i64>>> {
    let count = NotificationRepo::unread_count(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: count }))
}

/// POST /api/v1/users/{user_id}/notifications/read-all
///
/// Returns the number of notifications that were marked.
pub async fn mark_all_read(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<DataResponse<u64>>> {
    let count = NotificationRepo::mark_all_read(&state.pool, user_id).await?;
    Ok(Json(DataResponse { data: count }))
}

/// POST /api/v1/notifications/{id}/read
///
/// Marks one notification as read. Reading an already-read notification
/// is a no-op that still returns the row.
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Notification>> {
    if let Some(notification) = NotificationRepo::mark_read(&state.pool, id).await? {
        return Ok(Json(notification));
    }
    // Already read, or missing entirely.
    let notification = NotificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification",
            id,
        }))?;
    Ok(Json(notification))
}
