//! Closed error enums for each service domain.
//!
//! Services translate driver-level failures into these variants; handlers
//! match them exhaustively when choosing an HTTP status.

/// Failures of the customer service.
#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("Customer not found")]
    NotFound,

    /// Returned for both an unknown phone and a wrong password so that
    /// callers cannot probe which phones are registered.
    #[error("Invalid phone or password")]
    InvalidPassword,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures of the token validation service.
#[derive(Debug, thiserror::Error)]
pub enum SecurityError {
    #[error("No such user")]
    NoSuchUser,

    #[error("Token is expired")]
    Expired,

    #[error("Internal error: {0}")]
    Internal(String),
}
