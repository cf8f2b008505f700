//! Route definitions for the `/organizations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::organization;
use crate::state::AppState;

/// Routes mounted at `/organizations`.
///
/// ```text
/// POST   /                     -> create
/// GET    /                     -> list (?verified_only)
/// GET    /slug/{slug}          -> get_by_slug
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// POST   /{id}/verify          -> verify
/// GET    /{id}/tender-count    -> tender_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(organization::create).get(organization::list))
        .route("/slug/{slug}", get(organization::get_by_slug))
        .route(
            "/{id}",
            get(organization::get_by_id)
                .put(organization::update)
                .delete(organization::delete),
        )
        .route("/{id}/verify", post(organization::verify))
        .route("/{id}/tender-count", get(organization::tender_count))
}
