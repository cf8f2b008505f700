pub mod amendment;
pub mod bid;
pub mod category;
pub mod clarification;
pub mod contract;
pub mod document;
pub mod evaluation;
pub mod health;
pub mod milestone;
pub mod notification;
pub mod organization;
pub mod review;
pub mod tender;
pub mod user;
pub mod vendor;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                     create, list
/// /users/{id}                                get
/// /users/{id}/notifications                  list (?unread_only&limit&offset)
/// /users/{id}/notifications/unread-count     unread count
/// /users/{id}/notifications/read-all         mark all read (POST)
///
/// /organizations                             create, list (?verified_only)
/// /organizations/slug/{slug}                 get by slug
/// /organizations/{id}                        get, update, delete
/// /organizations/{id}/verify                 verify (POST)
/// /organizations/{id}/tender-count           tender count
///
/// /categories                                create, list with tender counts
/// /categories/{id}                           get, update, delete
/// /categories/{id}/children                  subcategories
/// /categories/{id}/vendors                   vendors registered in category
///
/// /vendors                                   create, list
/// /vendors/slug/{slug}                       get by slug
/// /vendors/{id}                              get, update, delete
/// /vendors/{id}/verify                       verify (POST)
/// /vendors/{id}/blacklist                    blacklist (POST), unblacklist (DELETE)
/// /vendors/{id}/categories                   replace (PUT), list (GET)
/// /vendors/{id}/bids                         vendor's bids
/// /vendors/{id}/contracts                    vendor's contracts
/// /vendors/{id}/reviews                      reviews across vendor's contracts
///
/// /tenders                                   create, list (filters)
/// /tenders/bulk-status                       bulk status update (POST)
/// /tenders/slug/{slug}                       get by slug
/// /tenders/{id}                              get, update, delete
/// /tenders/{id}/status                       transition (POST)
/// /tenders/{id}/bid-statistics               per-status bid counts
/// /tenders/{id}/award                        award transaction (POST)
/// /tenders/{id}/contract                     awarded contract
/// /tenders/{id}/bids                         tender's bids
/// /tenders/{id}/documents                    upload (POST), list
/// /tenders/{id}/amendments                   publish (POST), list
/// /tenders/{id}/clarifications               ask (POST), list (?public_only)
/// /tenders/{id}/evaluations                  tender's evaluations
///
/// /tender-documents/{id}                     get, delete
/// /amendments/{id}                           get, delete
/// /clarifications/{id}                       get, delete
/// /clarifications/{id}/answer                answer (POST)
///
/// /bids                                      create
/// /bids/bulk-status                          bulk status update (POST)
/// /bids/{id}                                 get, update, delete
/// /bids/{id}/submit                          submit (POST)
/// /bids/{id}/withdraw                        withdraw (POST)
/// /bids/{id}/status                          transition (POST)
/// /bids/{id}/scores                          record scores (POST)
/// /bids/{id}/documents                       upload (POST), list
/// /bid-documents/{id}                        delete
///
/// /evaluations                               create
/// /evaluations/{id}                          get, delete
/// /evaluations/{id}/complete                 complete (POST)
/// /evaluations/{id}/bid-evaluations          score (POST), list best-first
///
/// /contracts                                 list (?status)
/// /contracts/slug/{slug}                     get by slug
/// /contracts/{id}                            get, update, delete
/// /contracts/{id}/status                     transition (POST)
/// /contracts/{id}/milestone-summary          milestone aggregate
/// /contracts/{id}/milestones                 create (POST), list
/// /contracts/{id}/milestones/plan            generate even plan (POST)
/// /contracts/{id}/review                     record (POST), get
/// /reviews/{id}                              delete
///
/// /milestones/{id}                           get, update, delete
/// /milestones/{id}/status                    transition (POST)
///
/// /notifications                             create (POST)
/// /notifications/{id}/read                   mark read (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/organizations", organization::router())
        .nest("/categories", category::router())
        .nest("/vendors", vendor::router())
        .nest("/tenders", tender::router())
        .nest("/tender-documents", document::tender_documents())
        .nest("/amendments", amendment::router())
        .nest("/clarifications", clarification::router())
        .nest("/bids", bid::router())
        .nest("/bid-documents", document::bid_documents())
        .nest("/evaluations", evaluation::router())
        .nest("/contracts", contract::router())
        .nest("/reviews", review::router())
        .nest("/milestones", milestone::router())
        .nest("/notifications", notification::router())
}
