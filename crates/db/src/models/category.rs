//! Tender category model and DTOs.
//!
//! Categories form a self-referential tree via `parent_id`; deleting a
//! parent cascades to its subcategories.

use procura_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tender_categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<DbId>,
}

/// A category joined with the number of tenders attached to it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryWithCount {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub parent_id: Option<DbId>,
    pub tender_count: i64,
}

/// DTO for creating a category. `slug` defaults to `slugify(name)`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<DbId>,
}

/// DTO for updating a category.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub parent_id: Option<DbId>,
}
