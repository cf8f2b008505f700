//! Route definitions for the `/vendors` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::vendor;
use crate::state::AppState;

/// Routes mounted at `/vendors`.
///
/// ```text
/// POST   /                     -> create
/// GET    /                     -> list
/// GET    /slug/{slug}          -> get_by_slug
/// GET    /{id}                 -> get_by_id
/// PUT    /{id}                 -> update
/// DELETE /{id}                 -> delete
/// POST   /{id}/verify          -> verify
/// POST   /{id}/blacklist       -> blacklist
/// DELETE /{id}/blacklist       -> unblacklist
/// PUT    /{id}/categories      -> set_categories
/// GET    /{id}/categories      -> categories
/// GET    /{id}/bids            -> bids
/// GET    /{id}/contracts       -> contracts
/// GET    /{id}/reviews         -> reviews
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(vendor::create).get(vendor::list))
        .route("/slug/{slug}", get(vendor::get_by_slug))
        .route(
            "/{id}",
            get(vendor::get_by_id)
                .put(vendor::update)
                .delete(vendor::delete),
        )
        .route("/{id}/verify", post(vendor::verify))
        .route(
            "/{id}/blacklist",
            post(vendor::blacklist).delete(vendor::unblacklist),
        )
        .route(
            "/{id}/categories",
            put(vendor::set_categories).get(vendor::categories),
        )
        .route("/{id}/bids", get(vendor::bids))
        .route("/{id}/contracts", get(vendor::contracts))
        .route("/{id}/reviews", get(vendor::reviews))
}
