//! Domain-level building blocks shared by the db and api crates:
//! common ID/timestamp aliases, the domain error type, slug generation,
//! and milestone payment-plan arithmetic.

pub mod error;
pub mod milestone;
pub mod slug;
pub mod types;
