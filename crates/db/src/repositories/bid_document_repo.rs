//! Repository for the `bid_documents` table.

use procura_core::slug::slugify;
use procura_core::types::DbId;
use sqlx::PgPool;

use crate::models::bid_document::{BidDocument, CreateBidDocument};

const COLUMNS: &str =
    "id, bid_id, document_type, title, slug, file_path, description, uploaded_at";

/// Provides CRUD operations for bid documents.
pub struct BidDocumentRepo;

impl BidDocumentRepo {
    /// Attach a document to a bid, returning the created row.
    ///
    /// When `slug` is omitted it becomes `slugify(title)-{id}`; titles
    /// repeat across a bid's documents, so the row id disambiguates.
    pub async fn create(
        pool: &PgPool,
        bid_id: DbId,
        input: &CreateBidDocument,
    ) -> Result<BidDocument, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO bid_documents
                (bid_id, document_type, title, slug, file_path, description)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''))
             RETURNING {COLUMNS}"
        );
        let mut document = sqlx::query_as::<_, BidDocument>(&insert)
            .bind(bid_id)
            .bind(input.document_type)
            .bind(&input.title)
            .bind(input.slug.clone().unwrap_or_else(|| slugify(&input.title)))
            .bind(&input.file_path)
            .bind(&input.description)
            .fetch_one(&mut *tx)
            .await?;

        if input.slug.is_none() {
            let update =
                format!("UPDATE bid_documents SET slug = $2 WHERE id = $1 RETURNING {COLUMNS}");
            document = sqlx::query_as::<_, BidDocument>(&update)
                .bind(document.id)
                .bind(format!("{}-{}", document.slug, document.id))
                .fetch_one(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(document)
    }

    /// Find a document by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BidDocument>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bid_documents WHERE id = $1");
        sqlx::query_as::<_, BidDocument>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a bid's documents, grouped by type then title.
    pub async fn list_for_bid(pool: &PgPool, bid_id: DbId) -> Result<Vec<BidDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bid_documents
             WHERE bid_id = $1
             ORDER BY document_type ASC, title ASC"
        );
        sqlx::query_as::<_, BidDocument>(&query)
            .bind(bid_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a document record.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bid_documents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
