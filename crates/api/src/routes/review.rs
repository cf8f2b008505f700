//! Route definitions for the `/reviews` resource (item access; reviews
//! are recorded under `/contracts`).

use axum::routing::delete;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Routes mounted at `/reviews`.
///
/// ```text
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", delete(review::delete))
}
