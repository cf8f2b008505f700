//! Award orchestration, payment plans and derived aggregates.

mod common;

use chrono::NaiveDate;
use common::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use procura_db::models::contract::AwardContract;
use procura_db::models::review::CreateReview;
use procura_db::models::status::{BidStatus, TenderStatus};
use procura_db::repositories::{
    BidRepo, ContractRepo, MilestoneRepo, ReviewRepo, TenderRepo, VendorRepo,
};

#[sqlx::test(migrations = "../../db/migrations")]
async fn award_flips_tender_and_bid_and_creates_contract(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let winner = seed_vendor(&pool, "Winning Builders").await;
    let loser = seed_vendor(&pool, "Runner Up Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-10").await;
    let winning_bid = seed_bid(&pool, tender.id, winner.id, "BID-001").await;
    let losing_bid = seed_bid(&pool, tender.id, loser.id, "BID-002").await;

    let contract = ContractRepo::award(
        &pool,
        tender.id,
        &AwardContract {
            contract_number: "CT-2026-010".to_string(),
            slug: None,
            winning_bid_id: winning_bid.id,
            contract_value: dec!(450000.00),
            currency: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            duration_days: 365,
            terms_and_conditions: None,
            performance_bond_amount: None,
            retention_percentage: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(contract.slug, "ct-2026-010-winning-builders");
    assert_eq!(contract.vendor_id, winner.id);
    assert_eq!(contract.retention_percentage, dec!(10.00));

    let tender = TenderRepo::find_by_id(&pool, tender.id).await.unwrap().unwrap();
    assert_eq!(tender.status, TenderStatus::Awarded);
    let winning_bid = BidRepo::find_by_id(&pool, winning_bid.id).await.unwrap().unwrap();
    assert_eq!(winning_bid.status, BidStatus::Awarded);
    // Other bids keep their state.
    let losing_bid = BidRepo::find_by_id(&pool, losing_bid.id).await.unwrap().unwrap();
    assert_eq!(losing_bid.status, BidStatus::Draft);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn award_rejects_bid_from_another_tender(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender_a = seed_tender(&pool, org.id, "TN-11").await;
    let tender_b = seed_tender(&pool, org.id, "TN-12").await;
    let foreign_bid = seed_bid(&pool, tender_b.id, vendor.id, "BID-001").await;

    let err = ContractRepo::award(
        &pool,
        tender_a.id,
        &AwardContract {
            contract_number: "CT-2026-011".to_string(),
            slug: None,
            winning_bid_id: foreign_bid.id,
            contract_value: dec!(1000.00),
            currency: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            duration_days: 180,
            terms_and_conditions: None,
            performance_bond_amount: None,
            retention_percentage: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, sqlx::Error::RowNotFound));

    // Nothing in the transaction sticks.
    let tender_a = TenderRepo::find_by_id(&pool, tender_a.id).await.unwrap().unwrap();
    assert_eq!(tender_a.status, TenderStatus::Draft);
    assert!(ContractRepo::find_by_tender(&pool, tender_a.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_milestone_summary_is_all_zeros(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-20").await;
    let summary = ContractRepo::milestone_summary(&pool, contract.id).await.unwrap();
    assert_eq!(summary.total, 0);
    assert_eq!(summary.paid, 0);
    assert_eq!(summary.total_amount, Decimal::ZERO);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn payment_plan_splits_value_and_spreads_dates(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-21").await;
    let plan = MilestoneRepo::create_plan(&pool, contract.id, 3).await.unwrap();

    assert_eq!(plan.len(), 3);
    assert_eq!(plan[0].slug, "ct-21-milestone-1");
    assert_eq!(plan[0].amount, dec!(150000.00));
    assert_eq!(plan[2].amount, dec!(150000.00));
    let total: Decimal = plan.iter().map(|m| m.amount).sum();
    assert_eq!(total, contract.contract_value);
    let pct: Decimal = plan.iter().map(|m| m.percentage_of_total).sum();
    assert_eq!(pct, dec!(100.00));

    // Dates ascend and the plan ends on the contract end date.
    assert!(plan[0].due_date < plan[1].due_date);
    assert_eq!(plan[2].due_date, contract.end_date);

    let listed = MilestoneRepo::list_for_contract(&pool, contract.id).await.unwrap();
    let sequences: Vec<i32> = listed.iter().map(|m| m.sequence_number).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn uneven_plan_remainder_lands_in_last_milestone(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Odd Jobs Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-22").await;
    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-001").await;
    let contract = ContractRepo::award(
        &pool,
        tender.id,
        &AwardContract {
            contract_number: "CT-22".to_string(),
            slug: None,
            winning_bid_id: bid.id,
            contract_value: dec!(100000.01),
            currency: None,
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            duration_days: 365,
            terms_and_conditions: None,
            performance_bond_amount: None,
            retention_percentage: None,
        },
    )
    .await
    .unwrap();

    let plan = MilestoneRepo::create_plan(&pool, contract.id, 3).await.unwrap();
    assert_eq!(plan[0].amount, dec!(33333.34));
    assert_eq!(plan[1].amount, dec!(33333.34));
    assert_eq!(plan[2].amount, dec!(33333.33));
    let total: Decimal = plan.iter().map(|m| m.amount).sum();
    assert_eq!(total, dec!(100000.01));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bid_statistics_count_by_status(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let tender = seed_tender(&pool, org.id, "TN-23").await;
    let mut ids = Vec::new();
    for i in 0..4 {
        let vendor = seed_vendor(&pool, &format!("Stats Vendor {i}")).await;
        let bid = seed_bid(&pool, tender.id, vendor.id, &format!("BID-00{i}")).await;
        ids.push(bid.id);
    }
    BidRepo::set_status(&pool, ids[0], BidStatus::Submitted).await.unwrap();
    BidRepo::set_status(&pool, ids[1], BidStatus::Submitted).await.unwrap();
    BidRepo::set_status(&pool, ids[2], BidStatus::UnderReview).await.unwrap();

    let stats = TenderRepo::bid_statistics(&pool, tender.id).await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.submitted, 2);
    assert_eq!(stats.under_review, 1);
    assert_eq!(stats.awarded, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn review_updates_vendor_aggregate(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-24").await;
    let reviewer = seed_user(&pool, "reviewer").await;

    let review = ReviewRepo::create(
        &pool,
        contract.id,
        &CreateReview {
            reviewer_id: Some(reviewer.id),
            quality_rating: 4,
            timeliness_rating: 5,
            professionalism_rating: 4,
            overall_rating: dec!(4.33),
            comment: Some("Delivered on time.".to_string()),
            would_work_again: true,
        },
    )
    .await
    .unwrap();
    assert_eq!(review.contract_id, contract.id);

    let vendor = VendorRepo::find_by_id(&pool, contract.vendor_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(vendor.rating, dec!(4.33));
    assert_eq!(vendor.total_reviews, 1);

    // One review per contract.
    let err = ReviewRepo::create(
        &pool,
        contract.id,
        &CreateReview {
            reviewer_id: None,
            quality_rating: 1,
            timeliness_rating: 1,
            professionalism_rating: 1,
            overall_rating: dec!(1.00),
            comment: None,
            would_work_again: false,
        },
    )
    .await
    .unwrap_err();
    let code = err.as_database_error().and_then(|e| e.code()).unwrap().to_string();
    assert_eq!(code, "23505");
}
