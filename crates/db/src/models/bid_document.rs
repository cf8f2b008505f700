//! Bid document model and DTOs.

use procura_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::BidDocumentType;

/// A row from the `bid_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BidDocument {
    pub id: DbId,
    pub bid_id: DbId,
    pub document_type: BidDocumentType,
    pub title: String,
    pub slug: String,
    pub file_path: String,
    pub description: String,
    pub uploaded_at: Timestamp,
}

/// DTO for attaching a document to a bid.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBidDocument {
    pub document_type: BidDocumentType,
    pub title: String,
    pub slug: Option<String>,
    pub file_path: String,
    pub description: Option<String>,
}
