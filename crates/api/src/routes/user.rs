//! Route definitions for the `/users` resource, including the per-user
//! notification feed.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{notification, user};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST   /                                        -> create
/// GET    /                                        -> list
/// GET    /{id}                                    -> get_by_id
///
/// GET    /{user_id}/notifications                 -> notification::list
/// GET    /{user_id}/notifications/unread-count    -> notification::unread_count
/// POST   /{user_id}/notifications/read-all        -> notification::mark_all_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create).get(user::list))
        .route("/{id}", get(user::get_by_id))
        .route("/{user_id}/notifications", get(notification::list))
        .route(
            "/{user_id}/notifications/unread-count",
            get(notification::unread_count),
        )
        .route(
            "/{user_id}/notifications/read-all",
            post(notification::mark_all_read),
        )
}
