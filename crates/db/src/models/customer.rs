//! Customer entity model and DTOs.

use customers_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Public customer row from the `customers` table.
///
/// Deliberately omits the `password` column, so it is safe to serialize
/// straight into API responses.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub phone: String,
    pub active: bool,
    pub created: Timestamp,
}

/// Id and stored password hash, looked up by phone during login.
///
/// NEVER serialize this.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerCredentials {
    pub id: DbId,
    pub password: String,
}

/// DTO for inserting a customer. `password_hash` must already be hashed.
#[derive(Debug)]
pub struct CreateCustomer {
    pub name: String,
    pub phone: String,
    pub password_hash: String,
}

/// DTO for replacing a customer's mutable contact fields.
#[derive(Debug)]
pub struct UpdateCustomer {
    pub name: String,
    pub phone: String,
}
