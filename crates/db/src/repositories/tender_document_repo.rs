//! Repository for the `tender_documents` table.

use procura_core::slug::slugify;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::tender_document::{CreateTenderDocument, TenderDocument};

const COLUMNS: &str = "id, tender_id, document_type, title, slug, file_path, \
    file_size, description, is_mandatory, uploaded_at";

/// Provides CRUD operations for tender documents.
pub struct TenderDocumentRepo;

impl TenderDocumentRepo {
    /// Attach a document to a tender, returning the created row.
    ///
    /// When `slug` is omitted it becomes `slugify(title)-{id}`; titles
    /// repeat across a tender's documents, so the row id disambiguates.
    pub async fn create(
        pool: &PgPool,
        tender_id: DbId,
        input: &CreateTenderDocument,
    ) -> Result<TenderDocument, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO tender_documents
                (tender_id, document_type, title, slug, file_path, file_size,
                 description, is_mandatory)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0),
                     COALESCE($7, ''), COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        let mut document = sqlx::query_as::<_, TenderDocument>(&insert)
            .bind(tender_id)
            .bind(input.document_type)
            .bind(&input.title)
            .bind(input.slug.clone().unwrap_or_else(|| slugify(&input.title)))
            .bind(&input.file_path)
            .bind(input.file_size)
            .bind(&input.description)
            .bind(input.is_mandatory)
            .fetch_one(&mut *tx)
            .await?;

        if input.slug.is_none() {
            let update =
                format!("UPDATE tender_documents SET slug = $2 WHERE id = $1 RETURNING {COLUMNS}");
            document = sqlx::query_as::<_, TenderDocument>(&update)
                .bind(document.id)
                .bind(format!("{}-{}", document.slug, document.id))
                .fetch_one(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(document)
    }

    /// Find a document by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TenderDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tender_documents WHERE id = $1");
        sqlx::query_as::<_, TenderDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a tender's documents, grouped by type then title.
    pub async fn list_for_tender(
        pool: &PgPool,
        tender_id: DbId,
    ) -> Result<Vec<TenderDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tender_documents
             WHERE tender_id = $1
             ORDER BY document_type ASC, title ASC"
        );
        sqlx::query_as::<_, TenderDocument>(&query)
            .bind(tender_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document record. The stored blob is the file store's
    /// concern.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tender_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
