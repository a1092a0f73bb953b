//! Repository for the `customers_tokens` table.

use customers_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer_token::{CreateCustomerToken, CustomerToken, TokenOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "token, customer_id, expire, created";

/// Provides insert and lookup for customer session tokens.
///
/// Rows are never updated or deleted here; expired rows stay until the
/// owning customer is removed.
pub struct CustomerTokenRepo;

impl CustomerTokenRepo {
    /// Insert a new token, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCustomerToken,
    ) -> Result<CustomerToken, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers_tokens (token, customer_id, expire)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomerToken>(&query)
            .bind(&input.token)
            .bind(input.customer_id)
            .bind(input.expire)
            .fetch_one(pool)
            .await
    }

    /// Find the owner and expiry of a token by exact match.
    ///
    /// Expired tokens are returned too; the caller decides what expiry means.
    pub async fn find_owner(pool: &PgPool, token: &str) -> Result<Option<TokenOwner>, sqlx::Error> {
        sqlx::query_as::<_, TokenOwner>(
            "SELECT customer_id, expire FROM customers_tokens WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(pool)
        .await
    }

    /// List all tokens held by a customer, newest first.
    ///
    /// Inspection helper for tests and operator tooling; the request path
    /// only ever resolves a single token through [`Self::find_owner`].
    pub async fn list_for_customer(
        pool: &PgPool,
        customer_id: DbId,
    ) -> Result<Vec<CustomerToken>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM customers_tokens
             WHERE customer_id = $1
             ORDER BY created DESC"
        );
        sqlx::query_as::<_, CustomerToken>(&query)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }
}
