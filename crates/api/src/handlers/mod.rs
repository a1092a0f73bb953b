pub mod customers;
pub mod tokens;
