//! Tender document model and DTOs.
//!
//! Only the storage path and metadata live here; the blob itself is the
//! file store's problem.

use procura_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::TenderDocumentType;

/// A row from the `tender_documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TenderDocument {
    pub id: DbId,
    pub tender_id: DbId,
    pub document_type: TenderDocumentType,
    pub title: String,
    pub slug: String,
    pub file_path: String,
    pub file_size: i64,
    pub description: String,
    pub is_mandatory: bool,
    pub uploaded_at: Timestamp,
}

/// DTO for attaching a document to a tender.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTenderDocument {
    pub document_type: TenderDocumentType,
    pub title: String,
    pub slug: Option<String>,
    pub file_path: String,
    pub file_size: Option<i64>,
    pub description: Option<String>,
    pub is_mandatory: Option<bool>,
}
