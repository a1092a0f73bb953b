//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row plus the input DTOs its repository accepts.

pub mod customer;
pub mod customer_token;
