//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Status transitions are
//! explicit setters that bundle their timestamp side effects, so
//! "status X implies timestamp Y populated" holds without caller
//! discipline.

pub mod amendment_repo;
pub mod bid_document_repo;
pub mod bid_repo;
pub mod category_repo;
pub mod clarification_repo;
pub mod contract_repo;
pub mod evaluation_repo;
pub mod milestone_repo;
pub mod notification_repo;
pub mod organization_repo;
pub mod review_repo;
pub mod tender_document_repo;
pub mod tender_repo;
pub mod user_repo;
pub mod vendor_repo;

pub use amendment_repo::AmendmentRepo;
pub use bid_document_repo::BidDocumentRepo;
pub use bid_repo::BidRepo;
pub use category_repo::CategoryRepo;
pub use clarification_repo::ClarificationRepo;
pub use contract_repo::ContractRepo;
pub use evaluation_repo::EvaluationRepo;
pub use milestone_repo::MilestoneRepo;
pub use notification_repo::NotificationRepo;
pub use organization_repo::OrganizationRepo;
pub use review_repo::ReviewRepo;
pub use tender_document_repo::TenderDocumentRepo;
pub use tender_repo::TenderRepo;
pub use user_repo::UserRepo;
pub use vendor_repo::VendorRepo;
