//! Customer session token model and DTOs.

use customers_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `customers_tokens` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerToken {
    pub token: String,
    pub customer_id: DbId,
    pub expire: Timestamp,
    pub created: Timestamp,
}

/// The subset of a token row needed to authenticate a request.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct TokenOwner {
    pub customer_id: DbId,
    pub expire: Timestamp,
}

/// DTO for issuing a new token.
pub struct CreateCustomerToken {
    pub token: String,
    pub customer_id: DbId,
    pub expire: Timestamp,
}
