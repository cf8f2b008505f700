//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod amendment;
pub mod bid;
pub mod bid_document;
pub mod category;
pub mod clarification;
pub mod contract;
pub mod evaluation;
pub mod milestone;
pub mod notification;
pub mod organization;
pub mod review;
pub mod status;
pub mod tender;
pub mod tender_document;
pub mod user;
pub mod vendor;
