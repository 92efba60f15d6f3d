//! Full-stack API tests against PostgreSQL
//!
//! These tests run the real router over the Postgres-backed stores inside
//! a testcontainers database, exercising the SQL paths end to end.
//! They are ignored by default because they need a Docker daemon:
//!
//! ```bash
//! cargo test -p interface_api --test postgres_api_tests -- --ignored
//! ```

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use domain_cards::{CompanyService, CompanyStore, TransactionService, TransactionStore};
use infra_db::{PgCompanyStore, PgTransactionStore};
use interface_api::{create_router, AppState};
use test_utils::{
    CompanyBuilder, TemporalFixtures, TestDatabase, TransactionBuilder, UserBuilder,
};

fn server_over(db: &TestDatabase) -> TestServer {
    let pool = db.pool().clone();
    let company_store: Arc<dyn CompanyStore> = Arc::new(PgCompanyStore::new(pool.clone()));
    let transaction_store: Arc<dyn TransactionStore> = Arc::new(PgTransactionStore::new(pool));
    let state = AppState {
        company_service: CompanyService::new(company_store, Arc::clone(&transaction_store)),
        transaction_service: TransactionService::new(transaction_store),
    };
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
#[ignore = "requires a Docker daemon for the Postgres container"]
async fn test_company_summary_roundtrip() {
    let db = TestDatabase::new().await.expect("container start");
    let server = server_over(&db);

    let user = UserBuilder::new().build();
    let company = CompanyBuilder::new().active().build();
    db.insert_user(&user).await.unwrap();
    db.insert_company(&company).await.unwrap();
    db.grant_access(&user, &company, "admin").await.unwrap();
    for (i, amount) in [1500, 300, 200].into_iter().enumerate() {
        db.insert_transaction(
            &TransactionBuilder::new()
                .with_company_id(company.id)
                .with_user_id(user.id)
                .with_amount(amount)
                .with_created_at(TemporalFixtures::transaction_time(i as u32))
                .build(),
        )
        .await
        .unwrap();
    }

    let response = server
        .get(&format!("/api/v1/users/{}/companies", user.id.as_uuid()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let summary = &body["companies"][0];
    assert_eq!(summary["transactionsCount"], 3);
    let amounts: Vec<i64> = summary["latestTransactions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["amount"].as_i64().unwrap())
        .collect();
    assert_eq!(amounts, vec![200, 300, 1500]);
}

#[tokio::test]
#[ignore = "requires a Docker daemon for the Postgres container"]
async fn test_activation_roundtrip_and_idempotency() {
    let db = TestDatabase::new().await.expect("container start");
    let server = server_over(&db);

    let company = CompanyBuilder::new().build();
    db.insert_company(&company).await.unwrap();
    let path = format!("/api/v1/companies/{}/activate", company.id.as_uuid());

    let first = server.patch(&path).await;
    first.assert_status_ok();
    let first_body: Value = first.json();
    assert_eq!(first_body["company"]["status"], "ACTIVE");

    // Re-activation succeeds and the row keeps ACTIVE status
    let second = server.patch(&path).await;
    second.assert_status_ok();
    let second_body: Value = second.json();
    assert_eq!(second_body["company"]["status"], "ACTIVE");

    // activated_at was refreshed by the second call
    let activated_at: (chrono::DateTime<chrono::Utc>,) =
        sqlx::query_as("SELECT activated_at FROM companies WHERE id = $1")
            .bind(uuid::Uuid::from(company.id))
            .fetch_one(db.pool())
            .await
            .unwrap();
    assert!(activated_at.0 > company.created_at);
}

#[tokio::test]
#[ignore = "requires a Docker daemon for the Postgres container"]
async fn test_unknown_ids_map_to_404() {
    let db = TestDatabase::new().await.expect("container start");
    let server = server_over(&db);

    let unknown = uuid::Uuid::new_v4();

    let users = server
        .get(&format!("/api/v1/users/{}/companies", unknown))
        .await;
    users.assert_status_not_found();

    let transactions = server
        .get(&format!("/api/v1/companies/{}/transactions", unknown))
        .await;
    transactions.assert_status_not_found();

    let activate = server
        .patch(&format!("/api/v1/companies/{}/activate", unknown))
        .await;
    activate.assert_status_not_found();
}

#[tokio::test]
#[ignore = "requires a Docker daemon for the Postgres container"]
async fn test_timestamp_ties_break_deterministically() {
    let db = TestDatabase::new().await.expect("container start");
    let server = server_over(&db);

    let company = CompanyBuilder::new().build();
    db.insert_company(&company).await.unwrap();
    let user = UserBuilder::new().build();
    db.insert_user(&user).await.unwrap();

    // Three transactions sharing one timestamp; id DESC settles the order
    let at = TemporalFixtures::transaction_time(0);
    for amount in [100, 200, 300] {
        db.insert_transaction(
            &TransactionBuilder::new()
                .with_company_id(company.id)
                .with_user_id(user.id)
                .with_amount(amount)
                .with_created_at(at)
                .build(),
        )
        .await
        .unwrap();
    }

    let path = format!("/api/v1/companies/{}/transactions", company.id.as_uuid());
    let first: Value = server.get(&path).await.json();
    let second: Value = server.get(&path).await.json();
    assert_eq!(first, second);
}
