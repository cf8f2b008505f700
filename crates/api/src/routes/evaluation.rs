//! Route definitions for the `/evaluations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::evaluation;
use crate::state::AppState;

/// Routes mounted at `/evaluations`.
///
/// ```text
/// POST   /                         -> create
/// GET    /{id}                     -> get_by_id
/// DELETE /{id}                     -> delete
/// POST   /{id}/complete            -> complete
/// POST   /{id}/bid-evaluations     -> create_bid_evaluation
/// GET    /{id}/bid-evaluations     -> list_bid_evaluations (best first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(evaluation::create))
        .route(
            "/{id}",
            get(evaluation::get_by_id).delete(evaluation::delete),
        )
        .route("/{id}/complete", post(evaluation::complete))
        .route(
            "/{id}/bid-evaluations",
            post(evaluation::create_bid_evaluation).get(evaluation::list_bid_evaluations),
        )
}
