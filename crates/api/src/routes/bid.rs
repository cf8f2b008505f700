//! Route definitions for the `/bids` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{bid, bid_document};
use crate::state::AppState;

/// Routes mounted at `/bids`.
///
/// ```text
/// POST   /                 -> create
/// POST   /bulk-status      -> set_status_bulk
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// POST   /{id}/submit      -> submit
/// POST   /{id}/withdraw    -> withdraw
/// POST   /{id}/status      -> set_status
/// POST   /{id}/scores      -> record_scores
/// POST   /{id}/documents   -> bid_document::create
/// GET    /{id}/documents   -> bid_document::list
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(bid::create))
        .route("/bulk-status", post(bid::set_status_bulk))
        .route(
            "/{id}",
            get(bid::get_by_id).put(bid::update).delete(bid::delete),
        )
        .route("/{id}/submit", post(bid::submit))
        .route("/{id}/withdraw", post(bid::withdraw))
        .route("/{id}/status", post(bid::set_status))
        .route("/{id}/scores", post(bid::record_scores))
        .route(
            "/{id}/documents",
            post(bid_document::create).get(bid_document::list),
        )
}
