//! Shared building blocks for the customers service: primitive types,
//! closed domain error enums, and credential helpers.

pub mod credentials;
pub mod error;
pub mod types;
