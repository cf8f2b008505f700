//! HTTP handlers, one module per resource.

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
pub mod tender;
pub mod tender_document;
pub mod user;
pub mod vendor;
