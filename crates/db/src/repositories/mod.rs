//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod customer_repo;
pub mod customer_token_repo;
pub mod manager_repo;

pub use customer_repo::CustomerRepo;
pub use customer_token_repo::CustomerTokenRepo;
pub use manager_repo::ManagerRepo;
