//! Route definitions for the `/tenders` resource and its nested
//! collections.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{amendment, bid, clarification, evaluation, tender, tender_document};
use crate::state::AppState;

/// Routes mounted at `/tenders`.
///
/// ```text
/// POST   /                         -> create
/// GET    /                         -> list (?status&organization_id&category_id&search)
/// POST   /bulk-status              -> set_status_bulk
/// GET    /slug/{slug}              -> get_by_slug
/// GET    /{id}                     -> get_by_id
/// PUT    /{id}                     -> update
/// DELETE /{id}                     -> delete
/// POST   /{id}/status              -> set_status
/// GET    /{id}/bid-statistics      -> bid_statistics
/// POST   /{id}/award               -> award
/// GET    /{id}/contract            -> contract
///
/// GET    /{id}/bids                -> bid::list_for_tender
/// POST   /{id}/documents           -> tender_document::create
/// GET    /{id}/documents           -> tender_document::list
/// POST   /{id}/amendments          -> amendment::create
/// GET    /{id}/amendments          -> amendment::list
/// POST   /{id}/clarifications      -> clarification::create
/// GET    /{id}/clarifications      -> clarification::list (?public_only)
/// GET    /{id}/evaluations         -> evaluation::list_for_tender
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(tender::create).get(tender::list))
        .route("/bulk-status", post(tender::set_status_bulk))
        .route("/slug/{slug}", get(tender::get_by_slug))
        .route(
            "/{id}",
            get(tender::get_by_id)
                .put(tender::update)
                .delete(tender::delete),
        )
        .route("/{id}/status", post(tender::set_status))
        .route("/{id}/bid-statistics", get(tender::bid_statistics))
        .route("/{id}/award", post(tender::award))
        .route("/{id}/contract", get(tender::contract))
        .route("/{id}/bids", get(bid::list_for_tender))
        .route(
            "/{id}/documents",
            post(tender_document::create).get(tender_document::list),
        )
        .route(
            "/{id}/amendments",
            post(amendment::create).get(amendment::list),
        )
        .route(
            "/{id}/clarifications",
            post(clarification::create).get(clarification::list),
        )
        .route("/{id}/evaluations", get(evaluation::list_for_tender))
}
