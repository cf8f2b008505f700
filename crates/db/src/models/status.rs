//! Closed enumerations backing the PostgreSQL ENUM columns.
//!
//! The status lifecycles are deliberately un-enforced at the storage
//! layer: any value may be written over any other, so administrative
//! overrides always work. `is_standard_transition` encodes the nominal
//! orderings as an advisory check; callers log non-standard transitions
//! instead of rejecting them.

use serde::{Deserialize, Serialize};

/// Kinds of organizations that publish tenders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "organization_type", rename_all = "snake_case")]
pub enum OrganizationType {
    Government,
    Private,
    Construction,
    Military,
    Education,
    Healthcare,
    Ngo,
    Parastatal,
    Municipality,
    Other,
}

/// Legal forms a vendor can register under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "business_type", rename_all = "snake_case")]
pub enum BusinessType {
    SoleProprietor,
    Partnership,
    Llc,
    Corporation,
    Cooperative,
}

/// Tender lifecycle.
///
/// Nominal path: draft -> published -> ongoing -> closed -> awarded.
/// `Cancelled` is a parallel terminal reachable from any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "tender_status", rename_all = "snake_case")]
pub enum TenderStatus {
    Draft,
    Published,
    Ongoing,
    Closed,
    Awarded,
    Cancelled,
}

impl TenderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Ongoing => "ongoing",
            Self::Closed => "closed",
            Self::Awarded => "awarded",
            Self::Cancelled => "cancelled",
        }
    }

    /// Whether `next` follows `self` on the nominal path.
    pub fn is_standard_transition(self, next: Self) -> bool {
        use TenderStatus::*;
        matches!(
            (self, next),
            (Draft, Published)
                | (Published, Ongoing)
                | (Ongoing, Closed)
                | (Closed, Awarded)
                | (Draft | Published | Ongoing | Closed, Cancelled)
        )
    }
}

/// Procurement methods a tender can be run under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "procurement_method", rename_all = "snake_case")]
pub enum ProcurementMethod {
    Open,
    Restricted,
    Negotiated,
    Framework,
    CompetitiveDialogue,
    RequestQuotation,
}

/// Bid lifecycle.
///
/// Nominal path: draft -> submitted -> under_review -> shortlisted or
/// rejected -> awarded. `Withdrawn` is reachable at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "bid_status", rename_all = "snake_case")]
pub enum BidStatus {
    Draft,
    Submitted,
    UnderReview,
    Shortlisted,
    Rejected,
    Awarded,
    Withdrawn,
}

impl BidStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::UnderReview => "under_review",
            Self::Shortlisted => "shortlisted",
            Self::Rejected => "rejected",
            Self::Awarded => "awarded",
            Self::Withdrawn => "withdrawn",
        }
    }

    pub fn is_standard_transition(self, next: Self) -> bool {
        use BidStatus::*;
        matches!(
            (self, next),
            (Draft, Submitted)
                | (Submitted, UnderReview)
                | (UnderReview, Shortlisted | Rejected)
                | (Shortlisted, Awarded)
                | (Draft | Submitted | UnderReview | Shortlisted, Withdrawn)
        )
    }
}

/// Document kinds attached to a tender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "tender_document_type", rename_all = "snake_case")]
pub enum TenderDocumentType {
    TenderNotice,
    TechnicalSpecs,
    BillQuantities,
    Drawings,
    TermsConditions,
    ContractTemplate,
    Prequalification,
    Addendum,
    Other,
}

/// Document kinds attached to a bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "bid_document_type", rename_all = "snake_case")]
pub enum BidDocumentType {
    TechnicalProposal,
    FinancialProposal,
    CompanyProfile,
    RegistrationCert,
    TaxClearance,
    FinancialStatements,
    ExperienceCert,
    BidSecurity,
    PowerAttorney,
    Other,
}

/// Contract lifecycle.
///
/// Nominal path: draft -> active -> completed. `Suspended` and
/// `Terminated` are side states reachable at any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "contract_status", rename_all = "snake_case")]
pub enum ContractStatus {
    Draft,
    Active,
    Suspended,
    Completed,
    Terminated,
}

impl ContractStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Completed => "completed",
            Self::Terminated => "terminated",
        }
    }

    pub fn is_standard_transition(self, next: Self) -> bool {
        use ContractStatus::*;
        matches!(
            (self, next),
            (Draft, Active)
                | (Active, Completed)
                | (Active, Suspended)
                | (Suspended, Active)
                | (Draft | Active | Suspended, Terminated)
        )
    }
}

/// Milestone lifecycle.
///
/// Nominal path: pending -> in_progress -> completed -> verified -> paid.
/// `Delayed` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "milestone_status", rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Completed,
    Verified,
    Paid,
    Delayed,
}

impl MilestoneStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Verified => "verified",
            Self::Paid => "paid",
            Self::Delayed => "delayed",
        }
    }

    pub fn is_standard_transition(self, next: Self) -> bool {
        use MilestoneStatus::*;
        matches!(
            (self, next),
            (Pending, InProgress)
                | (InProgress, Completed)
                | (Completed, Verified)
                | (Verified, Paid)
                | (Pending | InProgress | Completed | Verified, Delayed)
                | (Delayed, InProgress)
        )
    }
}

/// Evaluator recommendation for a scored bid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "recommendation", rename_all = "snake_case")]
pub enum Recommendation {
    Recommend,
    Conditional,
    NotRecommend,
}

/// Events a user can be notified about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationType {
    TenderPublished,
    TenderClosing,
    BidSubmitted,
    BidStatusChange,
    ClarificationAnswered,
    AmendmentPublished,
    ContractAwarded,
    MilestoneDue,
    PaymentReleased,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tender_nominal_path() {
        use TenderStatus::*;
        assert!(Draft.is_standard_transition(Published));
        assert!(Published.is_standard_transition(Ongoing));
        assert!(Ongoing.is_standard_transition(Closed));
        assert!(Closed.is_standard_transition(Awarded));
        assert!(!Draft.is_standard_transition(Awarded));
        assert!(!Awarded.is_standard_transition(Draft));
    }

    #[test]
    fn tender_cancelled_from_any_non_terminal() {
        use TenderStatus::*;
        for from in [Draft, Published, Ongoing, Closed] {
            assert!(from.is_standard_transition(Cancelled), "{from:?}");
        }
        assert!(!Awarded.is_standard_transition(Cancelled));
    }

    #[test]
    fn bid_review_fork() {
        use BidStatus::*;
        assert!(UnderReview.is_standard_transition(Shortlisted));
        assert!(UnderReview.is_standard_transition(Rejected));
        assert!(Shortlisted.is_standard_transition(Awarded));
        assert!(!Rejected.is_standard_transition(Awarded));
    }

    #[test]
    fn bid_withdrawn_reachable_before_terminal() {
        use BidStatus::*;
        for from in [Draft, Submitted, UnderReview, Shortlisted] {
            assert!(from.is_standard_transition(Withdrawn), "{from:?}");
        }
    }

    #[test]
    fn contract_suspension_round_trip() {
        use ContractStatus::*;
        assert!(Active.is_standard_transition(Suspended));
        assert!(Suspended.is_standard_transition(Active));
        assert!(!Completed.is_standard_transition(Active));
    }

    #[test]
    fn milestone_delayed_from_non_terminal_only() {
        use MilestoneStatus::*;
        for from in [Pending, InProgress, Completed, Verified] {
            assert!(from.is_standard_transition(Delayed), "{from:?}");
        }
        assert!(!Paid.is_standard_transition(Delayed));
        assert!(Delayed.is_standard_transition(InProgress));
    }

    #[test]
    fn wire_names_are_snake_case() {
        assert_eq!(BidStatus::UnderReview.as_str(), "under_review");
        assert_eq!(MilestoneStatus::InProgress.as_str(), "in_progress");
    }
}
