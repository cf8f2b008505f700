//! Handlers for tender clarifications (vendor questions and their
//! answers).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use procura_core::error::CoreError;
use procura_core::types::DbId;
use procura_db::models::clarification::{Clarification, CreateClarification};
use procura_db::models::notification::CreateNotification;
use procura_db::models::status::NotificationType;
use procura_db::repositories::{ClarificationRepo, NotificationRepo, VendorRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /tenders/{tender_id}/clarifications`.
#[derive(Debug, Deserialize)]
pub struct ClarificationQuery {
    /// If `true`, exclude private questions. Defaults to `false`.
    pub public_only: Option<bool>,
}

/// Body for `POST /clarifications/{id}/answer`.
#[derive(Debug, Deserialize)]
pub struct AnswerClarification {
    pub answer: String,
}

/// POST /api/v1/tenders/{tender_id}/clarifications
pub async fn create(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
    Json(input): Json<CreateClarification>,
) -> AppResult<(StatusCode, Json<Clarification>)> {
    if input.question.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "question must not be empty".to_string(),
        )));
    }
    let clarification = ClarificationRepo::create(&state.pool, tender_id, &input).await?;
    Ok((StatusCode::CREATED, Json(clarification)))
}

/// GET /api/v1/tenders/{tender_id}/clarifications
pub async fn list(
    State(state): State<AppState>,
    Path(tender_id): Path<DbId>,
    Query(params): Query<ClarificationQuery>,
) -> AppResult<Json<Vec<Clarification>>> {
    let clarifications = ClarificationRepo::list_for_tender(
        &state.pool,
        tender_id,
        params.public_only.unwrap_or(false),
    )
    .await?;
    Ok(Json(clarifications))
}

/// GET /api/v1/clarifications/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Clarification>> {
    let clarification = ClarificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Clarification",
            id,
        }))?;
    Ok(Json(clarification))
}

/// POST /api/v1/clarifications/{id}/answer
///
/// Answers a question exactly once; a second attempt conflicts. The
/// asking vendor's account is notified.
pub async fn answer(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AnswerClarification>,
) -> AppResult<Json<Clarification>> {
    if input.answer.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "answer must not be empty".to_string(),
        )));
    }

    let existing = ClarificationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Clarification",
            id,
        }))?;
    if existing.is_answered {
        return Err(AppError::Core(CoreError::Conflict(
            "Clarification is already answered".to_string(),
        )));
    }

    let clarification = ClarificationRepo::answer(&state.pool, id, &input.answer)
        .await?
        .ok_or(AppError::Core(CoreError::Conflict(
            "Clarification is already answered".to_string(),
        )))?;

    if let Some(vendor) = VendorRepo::find_by_id(&state.pool, clarification.vendor_id).await? {
        NotificationRepo::create(
            &state.pool,
            &CreateNotification {
                recipient_id: vendor.user_id,
                notification_type: NotificationType::ClarificationAnswered,
                title: "Your question was answered".to_string(),
                message: Some(clarification.question.clone()),
                link: Some(format!("/tenders/{}", clarification.tender_id)),
            },
        )
        .await?;
    }

    Ok(Json(clarification))
}

/// DELETE /api/v1/clarifications/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ClarificationRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Clarification",
            id,
        }))
    }
}
