//! Route definitions for the `/notifications` resource (creation and
//! single-item reads; per-user listing lives under `/users`).

use axum::routing::post;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// POST   /               -> create
/// POST   /{id}/read      -> mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(notification::create))
        .route("/{id}/read", post(notification::mark_read))
}
