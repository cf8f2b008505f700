//! Route definitions for the `/amendments` resource (item access;
//! publication happens under `/tenders`).

use axum::routing::get;
use axum::Router;

use crate::handlers::amendment;
use crate::state::AppState;

/// Routes mounted at `/amendments`.
///
/// ```text
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(amendment::get_by_id).delete(amendment::delete),
    )
}
