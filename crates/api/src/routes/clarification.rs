//! Route definitions for the `/clarifications` resource (item access;
//! questions are asked under `/tenders`).

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::clarification;
use crate::state::AppState;

/// Routes mounted at `/clarifications`.
///
/// ```text
/// GET    /{id}           -> get_by_id
/// DELETE /{id}           -> delete
/// POST   /{id}/answer    -> answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(clarification::get_by_id).delete(clarification::delete),
        )
        .route("/{id}/answer", post(clarification::answer))
}
