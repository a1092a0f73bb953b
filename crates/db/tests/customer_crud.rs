//! Integration tests for the customer repository.
//!
//! Exercises the repository layer against a real database:
//! - Create and fetch
//! - Ordered and filtered listing
//! - Update, activation toggles, delete-and-return
//! - Unique phone constraint

use customers_db::models::customer::{CreateCustomer, UpdateCustomer};
use customers_db::repositories::CustomerRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_customer(name: &str, phone: &str) -> CreateCustomer {
    CreateCustomer {
        name: name.to_string(),
        phone: phone.to_string(),
        password_hash: "$argon2id$v=19$placeholder".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn create_assigns_id_and_defaults_active(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("Alice", "+100"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert!(created.active, "new customers start active");

    let fetched = CustomerRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("customer should exist");
    assert_eq!(fetched, created);
}

#[sqlx::test(migrations = "./migrations")]
async fn find_by_id_missing_returns_none(pool: PgPool) {
    let found = CustomerRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn duplicate_phone_is_rejected(pool: PgPool) {
    CustomerRepo::create(&pool, &new_customer("A", "+200"))
        .await
        .unwrap();
    let err = CustomerRepo::create(&pool, &new_customer("B", "+200"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn list_on_empty_table_is_empty(pool: PgPool) {
    assert!(CustomerRepo::list(&pool).await.unwrap().is_empty());
    assert!(CustomerRepo::list_active(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn list_orders_by_id_and_active_filters(pool: PgPool) {
    let a = CustomerRepo::create(&pool, &new_customer("A", "+1")).await.unwrap();
    let b = CustomerRepo::create(&pool, &new_customer("B", "+2")).await.unwrap();
    let c = CustomerRepo::create(&pool, &new_customer("C", "+3")).await.unwrap();

    CustomerRepo::set_active(&pool, b.id, false).await.unwrap();

    let all: Vec<_> = CustomerRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(all, vec![a.id, b.id, c.id]);

    let active: Vec<_> = CustomerRepo::list_active(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(active, vec![a.id, c.id]);
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn update_replaces_contact_fields(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("Old", "+10")).await.unwrap();

    let input = UpdateCustomer {
        name: "New".to_string(),
        phone: "+11".to_string(),
    };
    let updated = CustomerRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.name, "New");
    assert_eq!(updated.phone, "+11");
    assert_eq!(updated.active, created.active);
    assert_eq!(updated.created, created.created);

    let missing = CustomerRepo::update(&pool, 999_999, &input).await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn set_active_is_idempotent(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("A", "+20")).await.unwrap();

    for _ in 0..2 {
        let row = CustomerRepo::set_active(&pool, created.id, false)
            .await
            .unwrap()
            .unwrap();
        assert!(!row.active);
    }
    for _ in 0..2 {
        let row = CustomerRepo::set_active(&pool, created.id, true)
            .await
            .unwrap()
            .unwrap();
        assert!(row.active);
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_returns_snapshot_then_row_is_gone(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("Gone", "+30")).await.unwrap();

    let deleted = CustomerRepo::delete(&pool, created.id)
        .await
        .unwrap()
        .expect("row should be returned");
    assert_eq!(deleted, created);

    assert!(CustomerRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(CustomerRepo::delete(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn credentials_lookup_by_phone(pool: PgPool) {
    let created = CustomerRepo::create(&pool, &new_customer("A", "+40")).await.unwrap();

    let creds = CustomerRepo::find_credentials_by_phone(&pool, "+40")
        .await
        .unwrap()
        .expect("credentials should exist");
    assert_eq!(creds.id, created.id);
    assert_eq!(creds.password, "$argon2id$v=19$placeholder");

    let hash = CustomerRepo::find_password_hash(&pool, created.id).await.unwrap();
    assert_eq!(hash.as_deref(), Some("$argon2id$v=19$placeholder"));

    let none = CustomerRepo::find_credentials_by_phone(&pool, "+41").await.unwrap();
    assert!(none.is_none());
}
