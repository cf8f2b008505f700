//! Route definitions for the `/contracts` resource and its nested
//! milestones and review.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contract, milestone, review};
use crate::state::AppState;

/// Routes mounted at `/contracts`.
///
/// ```text
/// GET    /                         -> list (?status)
/// GET    /slug/{slug}              -> get_by_slug
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// POST   /{id}/status              -> set_status
/// GET    /{id}/milestone-summary   -> milestone_summary
///
/// POST   /{id}/milestones          -> milestone::create
/// GET    /{id}/milestones          -> milestone::list_for_contract
/// POST   /{id}/milestones/plan     -> milestone::create_plan
///
/// POST   /{id}/review              -> review::create
/// GET    /{id}/review              -> review::get_for_contract
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contract::list))
        .route("/slug/{slug}", get(contract::get_by_slug))
        .route(
            "/{id}",
            get(contract::get_by_id)
                .put(contract::update)
                .delete(contract::delete),
        )
        .route("/{id}/status", post(contract::set_status))
        .route("/{id}/milestone-summary", get(contract::milestone_summary))
        .route(
            "/{id}/milestones",
            post(milestone::create).get(milestone::list_for_contract),
        )
        .route("/{id}/milestones/plan", post(milestone::create_plan))
        .route(
            "/{id}/review",
            post(review::create).get(review::get_for_contract),
        )
}
