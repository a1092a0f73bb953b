//! Domain services.
//!
//! Each service owns a clone of the pool (injected through its constructor)
//! and translates repository results into the closed error enums from
//! `customers_core::error`.

pub mod customers;
pub mod security;

pub use customers::CustomersService;
pub use security::SecurityService;
