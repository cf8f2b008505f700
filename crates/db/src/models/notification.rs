//! Notification entity model and DTOs.
//!
//! Notifications are plain rows created synchronously by the handler
//! that triggered them; there is no delivery pipeline.

use procura_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::NotificationType;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub recipient_id: DbId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub link: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub read_at: Option<Timestamp>,
}

/// DTO for creating a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNotification {
    pub recipient_id: DbId,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: Option<String>,
    pub link: Option<String>,
}
