//! Entity CRUD, slug generation and uniqueness constraints.

mod common;

use common::*;
use rust_decimal_macros::dec;
use sqlx::PgPool;

use procura_db::models::bid::CreateBid;
use procura_db::models::category::{CreateCategory, UpdateCategory};
use procura_db::models::evaluation::{CreateBidEvaluation, CreateEvaluation};
use procura_db::models::milestone::CreateMilestone;
use procura_db::models::organization::UpdateOrganization;
use procura_db::models::status::{Recommendation, TenderDocumentType, TenderStatus};
use procura_db::models::tender::TenderFilter;
use procura_db::models::tender_document::CreateTenderDocument;
use procura_db::repositories::{
    BidRepo, CategoryRepo, EvaluationRepo, MilestoneRepo, OrganizationRepo, TenderDocumentRepo,
    TenderRepo, VendorRepo,
};

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().and_then(|e| e.code()),
        Some(code) if code == "23505"
    )
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn organization_slug_defaults_and_survives_rename(pool: PgPool) {
    let org = seed_organization(&pool, "Ministry of Roads & Transport").await;
    assert_eq!(org.slug, "ministry-of-roads-transport");
    assert!(!org.is_verified);

    let updated = OrganizationRepo::update(
        &pool,
        org.id,
        &UpdateOrganization {
            name: Some("Ministry of Infrastructure".to_string()),
            organization_type: None,
            email: None,
            phone: None,
            address: None,
            city: None,
            country: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    // Slug is computed once at creation and never follows renames.
    assert_eq!(updated.name, "Ministry of Infrastructure");
    assert_eq!(updated.slug, "ministry-of-roads-transport");
    assert!(updated.updated_at > org.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tender_slug_combines_title_and_number(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-001").await;

    assert_eq!(tender.slug, "road-rehabilitation-works-tn-2026-001");
    assert_eq!(tender.status, TenderStatus::Draft);
    assert_eq!(tender.currency, "USD");

    let by_slug = TenderRepo::find_by_slug(&pool, &tender.slug).await.unwrap();
    assert_eq!(by_slug.unwrap().id, tender.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bid_slug_compounds_company_tender_and_number(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Constructions Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-002").await;

    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-007").await;
    assert_eq!(bid.slug, "acme-constructions-ltd-tn-2026-002-bid-007");
    assert!(bid.submitted_at.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn document_slug_appends_row_id(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-003").await;

    let input = CreateTenderDocument {
        document_type: TenderDocumentType::TechnicalSpecs,
        title: "Technical Specifications".to_string(),
        slug: None,
        file_path: "/files/specs.pdf".to_string(),
        file_size: None,
        description: None,
        is_mandatory: None,
    };
    let first = TenderDocumentRepo::create(&pool, tender.id, &input)
        .await
        .unwrap();
    let second = TenderDocumentRepo::create(&pool, tender.id, &input)
        .await
        .unwrap();

    // Repeated titles stay distinguishable: the row id is appended.
    assert_eq!(first.slug, format!("technical-specifications-{}", first.id));
    assert_eq!(second.slug, format!("technical-specifications-{}", second.id));
    assert_ne!(first.slug, second.slug);

    // A caller-supplied slug is stored verbatim.
    let explicit = TenderDocumentRepo::create(
        &pool,
        tender.id,
        &CreateTenderDocument {
            slug: Some("annex-b".to_string()),
            ..input
        },
    )
    .await
    .unwrap();
    assert_eq!(explicit.slug, "annex-b");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn second_bid_per_tender_vendor_pair_is_rejected(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-003").await;
    let first = seed_bid(&pool, tender.id, vendor.id, "BID-001").await;

    let err = BidRepo::create(
        &pool,
        &CreateBid {
            bid_number: "BID-002".to_string(),
            slug: None,
            tender_id: tender.id,
            vendor_id: vendor.id,
            bid_amount: dec!(400000.00),
            currency: None,
            technical_proposal: None,
            financial_proposal: None,
            delivery_timeline_days: None,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));

    // First bid is untouched by the failed insert.
    let kept = BidRepo::find_by_id(&pool, first.id).await.unwrap().unwrap();
    assert_eq!(kept.bid_number, "BID-001");
    assert_eq!(kept.bid_amount, dec!(450000.00));
    assert_eq!(BidRepo::list_for_tender(&pool, tender.id).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_milestone_sequence_is_rejected(pool: PgPool) {
    let contract = seed_contract(&pool, "CT-2026-001").await;

    let milestone = MilestoneRepo::create(
        &pool,
        contract.id,
        &CreateMilestone {
            title: "Site mobilization".to_string(),
            slug: None,
            description: None,
            sequence_number: 1,
            deliverables: None,
            amount: dec!(100000.00),
            percentage_of_total: dec!(22.22),
            due_date: contract.start_date,
        },
    )
    .await
    .unwrap();
    assert_eq!(milestone.slug, "ct-2026-001-milestone-1");

    let err = MilestoneRepo::create(
        &pool,
        contract.id,
        &CreateMilestone {
            title: "Duplicate".to_string(),
            slug: Some("other-slug".to_string()),
            description: None,
            sequence_number: 1,
            deliverables: None,
            amount: dec!(1.00),
            percentage_of_total: dec!(1.00),
            due_date: contract.start_date,
        },
    )
    .await
    .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_score_per_evaluation_bid_pair(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-004").await;
    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-001").await;

    let evaluation = EvaluationRepo::create(
        &pool,
        &CreateEvaluation {
            tender_id: tender.id,
            evaluator_id: None,
            technical_criteria: None,
            financial_criteria: None,
            notes: None,
        },
    )
    .await
    .unwrap();
    assert!(!evaluation.is_completed);

    let score = CreateBidEvaluation {
        bid_id: bid.id,
        technical_scores: None,
        financial_score: dec!(80.00),
        total_score: dec!(85.50),
        remarks: None,
        recommendation: Recommendation::Recommend,
    };
    EvaluationRepo::create_bid_evaluation(&pool, evaluation.id, &score)
        .await
        .unwrap();

    let err = EvaluationRepo::create_bid_evaluation(&pool, evaluation.id, &score)
        .await
        .unwrap_err();
    assert!(is_unique_violation(&err));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_tender_cascades_to_bids(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let tender = seed_tender(&pool, org.id, "TN-2026-005").await;
    let bid = seed_bid(&pool, tender.id, vendor.id, "BID-001").await;

    assert!(TenderRepo::delete(&pool, tender.id).await.unwrap());
    assert!(BidRepo::find_by_id(&pool, bid.id).await.unwrap().is_none());
    // Vendor is independent of the tender.
    assert!(VendorRepo::find_by_id(&pool, vendor.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_category_detaches_tenders(pool: PgPool) {
    let org = seed_organization(&pool, "County Works").await;
    let category = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Civil Works".to_string(),
            slug: None,
            description: None,
            parent_id: None,
        },
    )
    .await
    .unwrap();

    let tender = seed_tender(&pool, org.id, "TN-2026-006").await;
    TenderRepo::update(
        &pool,
        tender.id,
        &procura_db::models::tender::UpdateTender {
            category_id: Some(category.id),
            title: None,
            description: None,
            detailed_requirements: None,
            procurement_method: None,
            estimated_value: None,
            bid_security_amount: None,
            submission_deadline: None,
            opening_date: None,
            expected_award_date: None,
            project_location: None,
            project_country: None,
            is_featured: None,
        },
    )
    .await
    .unwrap();

    assert!(CategoryRepo::delete(&pool, category.id).await.unwrap());
    let detached = TenderRepo::find_by_id(&pool, tender.id).await.unwrap().unwrap();
    assert_eq!(detached.category_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_tree_and_rename(pool: PgPool) {
    let parent = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Construction".to_string(),
            slug: None,
            description: None,
            parent_id: None,
        },
    )
    .await
    .unwrap();
    let child = CategoryRepo::create(
        &pool,
        &CreateCategory {
            name: "Roads".to_string(),
            slug: None,
            description: None,
            parent_id: Some(parent.id),
        },
    )
    .await
    .unwrap();

    let children = CategoryRepo::list_children(&pool, parent.id).await.unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id, child.id);

    let renamed = CategoryRepo::update(
        &pool,
        child.id,
        &UpdateCategory {
            name: Some("Road Works".to_string()),
            description: None,
            parent_id: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(renamed.name, "Road Works");
    assert_eq!(renamed.slug, "roads");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn vendor_categories_are_replaced_atomically(pool: PgPool) {
    let vendor = seed_vendor(&pool, "Acme Ltd").await;
    let mut ids = Vec::new();
    for name in ["Roads", "Bridges", "Water"] {
        let category = CategoryRepo::create(
            &pool,
            &CreateCategory {
                name: name.to_string(),
                slug: None,
                description: None,
                parent_id: None,
            },
        )
        .await
        .unwrap();
        ids.push(category.id);
    }

    VendorRepo::set_categories(&pool, vendor.id, &ids[..2]).await.unwrap();
    assert_eq!(VendorRepo::category_ids(&pool, vendor.id).await.unwrap().len(), 2);

    VendorRepo::set_categories(&pool, vendor.id, &ids[2..]).await.unwrap();
    let current = VendorRepo::category_ids(&pool, vendor.id).await.unwrap();
    assert_eq!(current, vec![ids[2]]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn tender_list_filters_compose(pool: PgPool) {
    let org_a = seed_organization(&pool, "Org A").await;
    let org_b = seed_organization(&pool, "Org B").await;
    let t1 = seed_tender(&pool, org_a.id, "TN-A-1").await;
    let _t2 = seed_tender(&pool, org_b.id, "TN-B-1").await;
    TenderRepo::set_status(&pool, t1.id, TenderStatus::Published).await.unwrap();

    let all = TenderRepo::list(&pool, &TenderFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let published = TenderRepo::list(
        &pool,
        &TenderFilter {
            status: Some(TenderStatus::Published),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, t1.id);

    let searched = TenderRepo::list(
        &pool,
        &TenderFilter {
            search: Some("tn-b".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(searched.len(), 1);
    assert_eq!(searched[0].organization_id, org_b.id);
}
