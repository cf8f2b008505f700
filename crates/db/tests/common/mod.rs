//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, Utc};
use rust_decimal_macros::dec;
use sqlx::PgPool;

use procura_db::models::bid::{Bid, CreateBid};
use procura_db::models::contract::{AwardContract, Contract};
use procura_db::models::organization::{CreateOrganization, Organization};
use procura_db::models::status::{BusinessType, OrganizationType, ProcurementMethod};
use procura_db::models::tender::{CreateTender, Tender};
use procura_db::models::user::{CreateUser, User};
use procura_db::models::vendor::{CreateVendor, Vendor};
use procura_db::repositories::{BidRepo, ContractRepo, OrganizationRepo, TenderRepo, UserRepo, VendorRepo};

pub async fn seed_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            full_name: None,
        },
    )
    .await
    .expect("seed user")
}

pub async fn seed_organization(pool: &PgPool, name: &str) -> Organization {
    OrganizationRepo::create(
        pool,
        &CreateOrganization {
            name: name.to_string(),
            slug: None,
            organization_type: OrganizationType::Government,
            registration_number: format!("REG-{name}"),
            email: "tenders@example.gov".to_string(),
            phone: None,
            address: None,
            city: None,
            country: Some("Kenya".to_string()),
        },
    )
    .await
    .expect("seed organization")
}

pub async fn seed_vendor(pool: &PgPool, company_name: &str) -> Vendor {
    let user = seed_user(pool, &company_name.to_lowercase().replace(' ', "-")).await;
    VendorRepo::create(
        pool,
        &CreateVendor {
            user_id: user.id,
            company_name: company_name.to_string(),
            slug: None,
            business_type: BusinessType::Llc,
            registration_number: format!("VND-{company_name}"),
            email: "bids@example.com".to_string(),
            phone: None,
            city: None,
            country: None,
            year_established: Some(2010),
            annual_turnover: None,
        },
    )
    .await
    .expect("seed vendor")
}

pub async fn seed_tender(pool: &PgPool, organization_id: i64, tender_number: &str) -> Tender {
    let now = Utc::now();
    TenderRepo::create(
        pool,
        &CreateTender {
            tender_number: tender_number.to_string(),
            slug: None,
            title: "Road Rehabilitation Works".to_string(),
            organization_id,
            category_id: None,
            description: None,
            detailed_requirements: None,
            status: None,
            procurement_method: ProcurementMethod::Open,
            estimated_value: dec!(500000.00),
            currency: None,
            bid_security_amount: None,
            publication_date: now,
            submission_deadline: now + Duration::days(30),
            opening_date: now + Duration::days(31),
            expected_award_date: None,
            project_location: None,
            project_country: None,
            created_by: None,
        },
    )
    .await
    .expect("seed tender")
}

pub async fn seed_bid(pool: &PgPool, tender_id: i64, vendor_id: i64, bid_number: &str) -> Bid {
    BidRepo::create(
        pool,
        &CreateBid {
            bid_number: bid_number.to_string(),
            slug: None,
            tender_id,
            vendor_id,
            bid_amount: dec!(450000.00),
            currency: None,
            technical_proposal: None,
            financial_proposal: None,
            delivery_timeline_days: Some(180),
        },
    )
    .await
    .expect("seed bid")
}

/// Full path to an awarded contract: organization, vendor, tender, bid,
/// then the award transaction.
pub async fn seed_contract(pool: &PgPool, contract_number: &str) -> Contract {
    let organization = seed_organization(pool, &format!("Org {contract_number}")).await;
    let vendor = seed_vendor(pool, &format!("Builder {contract_number}")).await;
    let tender = seed_tender(pool, organization.id, &format!("TN-{contract_number}")).await;
    let bid = seed_bid(pool, tender.id, vendor.id, "BID-001").await;

    ContractRepo::award(
        pool,
        tender.id,
        &AwardContract {
            contract_number: contract_number.to_string(),
            slug: None,
            winning_bid_id: bid.id,
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
    .expect("seed contract")
}
