//! Repository for the `customers` table.

use customers_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer, CustomerCredentials, UpdateCustomer};

/// Public column list shared across queries. Never includes `password`.
const COLUMNS: &str = "id, name, phone, active, created";

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (name, phone, password)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every customer ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// List active customers ordered by id ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE active = true ORDER BY id");
        sqlx::query_as::<_, Customer>(&query).fetch_all(pool).await
    }

    /// Replace name and phone. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCustomer,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET name = $2, phone = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .fetch_optional(pool)
            .await
    }

    /// Set the `active` flag. Returns `None` if no row with `id` exists.
    ///
    /// Setting the flag to its current value still returns the row.
    pub async fn set_active(
        pool: &PgPool,
        id: DbId,
        active: bool,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("UPDATE customers SET active = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a customer, returning the row as it was before deletion.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("DELETE FROM customers WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up the id and password hash registered for a phone.
    pub async fn find_credentials_by_phone(
        pool: &PgPool,
        phone: &str,
    ) -> Result<Option<CustomerCredentials>, sqlx::Error> {
        sqlx::query_as::<_, CustomerCredentials>(
            "SELECT id, password FROM customers WHERE phone = $1",
        )
        .bind(phone)
        .fetch_optional(pool)
        .await
    }

    /// Read the stored password hash for a customer.
    ///
    /// Inspection helper for tests and operator tooling; login goes through
    /// [`Self::find_credentials_by_phone`].
    pub async fn find_password_hash(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT password FROM customers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
