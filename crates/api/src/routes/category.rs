//! Route definitions for the `/categories` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::category;
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// POST   /                 -> create
/// GET    /                 -> list (with tender counts)
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/children    -> children
/// GET    /{id}/vendors     -> vendors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(category::create).get(category::list))
        .route(
            "/{id}",
            get(category::get_by_id)
                .put(category::update)
                .delete(category::delete),
        )
        .route("/{id}/children", get(category::children))
        .route("/{id}/vendors", get(category::vendors))
}
