//! Route definitions for document item access (uploads happen under
//! `/tenders` and `/bids`).

use axum::routing::get;
use axum::Router;

use crate::handlers::{bid_document, tender_document};
use crate::state::AppState;

/// Routes mounted at `/tender-documents`.
///
/// ```text
/// GET    /{id}   -> tender_document::get_by_id
/// DELETE /{id}   -> tender_document::delete
/// ```
pub fn tender_documents() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(tender_document::get_by_id).delete(tender_document::delete),
    )
}

/// Routes mounted at `/bid-documents`.
///
/// ```text
/// DELETE /{id}   -> bid_document::delete
/// ```
pub fn bid_documents() -> Router<AppState> {
    Router::new().route("/{id}", axum::routing::delete(bid_document::delete))
}
