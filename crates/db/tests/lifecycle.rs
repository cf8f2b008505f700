//! Status transitions and their timestamp side effects.
//!
//! Transitions are never blocked by the storage layer; these tests pin
//! down which columns each setter touches and which it leaves alone.

mod common;

use chrono::{NaiveDate, TimeZone, Utc};
use common::*;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use procura_db::models::bid::UpdateBid;
use procura_db::models::clarification::CreateClarification;
use procura_db::models::milestone::{CreateMilestone, UpdateMilestone};
use procura_db::models::notification::CreateNotification;
use procura_db::models::status::{
    BidStatus, ContractStatus, MilestoneStatus, NotificationType, TenderStatus,
};
use procura_db::repositories::{
    BidRepo, ClarificationRepo, ContractRepo, MilestoneRepo, NotificationRepo, TenderRepo,
};

#[sqlx::test(migrations = "../../db/migrations")]
async fn submitting_a_bid_stamps_submitted_at_once(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-1").await;
    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-001").await;
    assert_eq!(bid.status, BidStatus::Draft);

    let submitted = BidRepo::set_status(&pool, bid.id, BidStatus::Submitted)
        .await
        .unwrap()
        .unwrap();
    let stamp = submitted.submitted_at.expect("submission stamp");

    // Later transitions leave the original stamp in place, and only
    // the submitted transition stamps anything: moving to under_review
    // does not touch reviewed_at.
    let reviewed = BidRepo::set_status(&pool, bid.id, BidStatus::UnderReview)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reviewed.submitted_at, Some(stamp));
    assert!(reviewed.reviewed_at.is_none());

    // Round-tripping through submitted does not move it either.
    let resubmitted = BidRepo::set_status(&pool, bid.id, BidStatus::Submitted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resubmitted.submitted_at, Some(stamp));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bid_review_timestamp_is_recorded_manually(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-9").await;
    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-009").await;

    BidRepo::set_status(&pool, bid.id, BidStatus::Submitted)
        .await
        .unwrap();
    let reviewed = BidRepo::set_status(&pool, bid.id, BidStatus::UnderReview)
        .await
        .unwrap()
        .unwrap();
    assert!(reviewed.reviewed_at.is_none());

    // The evaluator records the review time through the update path.
    let when = Utc.with_ymd_and_hms(2026, 8, 20, 10, 0, 0).unwrap();
    let updated = BidRepo::update(
        &pool,
        bid.id,
        &UpdateBid {
            bid_amount: None,
            technical_proposal: None,
            financial_proposal: None,
            delivery_timeline_days: None,
            reviewed_at: Some(when),
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.reviewed_at, Some(when));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bulk_bid_update_touches_only_status(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let tender = seed_tender(&pool, org.id, "TN-2").await;
    let mut ids = Vec::new();
    for i in 0..3 {
        let vendor = seed_vendor(&pool, &format!("Vendor {i}")).await;
        let bid = seed_bid(&pool, tender.id, vendor.id, &format!("BID-00{i}")).await;
        ids.push(bid.id);
    }

    let changed = BidRepo::set_status_bulk(&pool, &ids, BidStatus::UnderReview)
        .await
        .unwrap();
    assert_eq!(changed, 3);

    for id in ids {
        let bid = BidRepo::find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(bid.status, BidStatus::UnderReview);
        // The bulk path skips per-row stamping and bookkeeping.
        assert!(bid.submitted_at.is_none());
        assert!(bid.reviewed_at.is_none());
        assert_eq!(bid.updated_at, bid.created_at);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tender_status_accepts_any_override(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let tender = seed_tender(&pool, org.id, "TN-3").await;

    // Skipping the nominal path entirely is allowed.
    let closed = TenderRepo::set_status(&pool, tender.id, TenderStatus::Closed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(closed.status, TenderStatus::Closed);

    let reopened = TenderRepo::set_status(&pool, tender.id, TenderStatus::Draft)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reopened.status, TenderStatus::Draft);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn milestone_completion_and_payment_stamps(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-1").await;
    let milestone = MilestoneRepo::create(
        &pool,
        contract.id,
        &CreateMilestone {
            title: "Foundation".to_string(),
            slug: None,
            description: None,
            sequence_number: 1,
            deliverables: None,
            amount: dec!(100000.00),
            percentage_of_total: dec!(25.00),
            due_date: contract.start_date,
        },
    )
    .await
    .unwrap();
    assert_eq!(milestone.status, MilestoneStatus::Pending);

    let completed = MilestoneRepo::set_status(&pool, milestone.id, MilestoneStatus::Completed)
        .await
        .unwrap()
        .unwrap();
    assert!(completed.completion_date.is_some());
    assert!(completed.payment_date.is_none());

    let paid = MilestoneRepo::set_status(&pool, milestone.id, MilestoneStatus::Paid)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(paid.completion_date, completed.completion_date);
    assert!(paid.payment_date.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn manually_recorded_dates_survive_transitions(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-2").await;
    let milestone = MilestoneRepo::create(
        &pool,
        contract.id,
        &CreateMilestone {
            title: "Roofing".to_string(),
            slug: None,
            description: None,
            sequence_number: 1,
            deliverables: None,
            amount: dec!(50000.00),
            percentage_of_total: dec!(12.50),
            due_date: contract.start_date,
        },
    )
    .await
    .unwrap();

    let actual_date = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
    MilestoneRepo::update(
        &pool,
        milestone.id,
        &UpdateMilestone {
            completion_date: Some(actual_date),
            title: None,
            description: None,
            deliverables: None,
            amount: None,
            percentage_of_total: None,
            due_date: None,
            payment_date: None,
        },
    )
    .await
    .unwrap();

    let completed = MilestoneRepo::set_status(&pool, milestone.id, MilestoneStatus::Completed)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(completed.completion_date, Some(actual_date));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn contract_suspension_and_resumption(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-3").await;
    assert_eq!(contract.status, ContractStatus::Draft);

    for status in [
        ContractStatus::Active,
        ContractStatus::Suspended,
        ContractStatus::Active,
        ContractStatus::Completed,
    ] {
        let updated = ContractRepo::set_status(&pool, contract.id, status)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn clarification_is_answered_exactly_once(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-4").await;

    let clarification = ClarificationRepo::create(
        &pool,
        tender.id,
        &CreateClarification {
            vendor_id: vendor.id,
            question: "Is the bid security refundable?".to_string(),
            is_public: None,
        },
    )
    .await
    .unwrap();
    assert!(!clarification.is_answered);

    let answered = ClarificationRepo::answer(&pool, clarification.id, "Yes, on award.")
        .await
        .unwrap()
        .unwrap();
    assert!(answered.is_answered);
    assert!(answered.answered_at.is_some());

    // A second answer does not overwrite the first.
    let again = ClarificationRepo::answer(&pool, clarification.id, "Different answer")
        .await
        .unwrap();
    assert!(again.is_none());
    let current = ClarificationRepo::find_by_id(&pool, clarification.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.answer, "Yes, on award.");
    assert_eq!(current.answered_at, answered.answered_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn notification_read_stamp_never_moves(pool: PgPool) {
    let user = seed_user(&pool, "procurement-officer").await;
    let notification = NotificationRepo::create(
        &pool,
        &CreateNotification {
            recipient_id: user.id,
            notification_type: NotificationType::TenderPublished,
            title: "New tender".to_string(),
            message: None,
            link: None,
        },
    )
    .await
    .unwrap();
    assert!(!notification.is_read);

    let read = NotificationRepo::mark_read(&pool, notification.id)
        .await
        .unwrap()
        .unwrap();
    assert!(read.read_at.is_some());

    assert!(NotificationRepo::mark_read(&pool, notification.id)
        .await
        .unwrap()
        .is_none());
    assert_eq!(NotificationRepo::unread_count(&pool, user.id).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn mark_all_read_reports_count(pool: PgPool) {
    let user = seed_user(&pool, "evaluator").await;
    for i in 0..3 {
        NotificationRepo::create(
            &pool,
            &CreateNotification {
                recipient_id: user.id,
                notification_type: NotificationType::BidStatusChange,
                title: format!("Update {i}"),
                message: None,
                link: None,
            },
        )
        .await
        .unwrap();
    }
    let unread = NotificationRepo::list_for_recipient(&pool, user.id, true, 50, 0)
        .await
        .unwrap();
    assert_eq!(unread.len(), 3);

    assert_eq!(NotificationRepo::mark_all_read(&pool, user.id).await.unwrap(), 3);
    assert_eq!(NotificationRepo::mark_all_read(&pool, user.id).await.unwrap(), 0);
}
