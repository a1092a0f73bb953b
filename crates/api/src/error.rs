use axum::http::header::WWW_AUTHENTICATE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use customers_core::error::{CustomerError, SecurityError};
use serde_json::json;

/// Realm advertised in `WWW-Authenticate` when manager credentials are missing.
pub const BASIC_REALM: &str = "Basic realm=\"customers\"";

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain error enums and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A failure from the customer service.
    #[error(transparent)]
    Customer(#[from] CustomerError),

    /// A failure from the token validation service.
    #[error(transparent)]
    Security(#[from] SecurityError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or rejected manager credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Customer service ---
            AppError::Customer(err) => match err {
                CustomerError::NotFound => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    "Customer not found".to_string(),
                ),
                // Token issuance reports bad credentials as a server error;
                // clients cannot tell a wrong password from an unknown phone.
                CustomerError::InvalidPassword => internal(),
                CustomerError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal customer service error");
                    internal()
                }
            },

            // --- Security service ---
            AppError::Security(err) => match err {
                SecurityError::NoSuchUser => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", "not found".to_string())
                }
                SecurityError::Expired => {
                    (StatusCode::BAD_REQUEST, "EXPIRED", "expired".to_string())
                }
                SecurityError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal security service error");
                    internal()
                }
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Unauthorized(msg) => {
                let body = json!({ "error": msg, "code": "UNAUTHORIZED" });
                return (
                    StatusCode::UNAUTHORIZED,
                    [(WWW_AUTHENTICATE, BASIC_REALM)],
                    axum::Json(body),
                )
                    .into_response();
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// The sanitized 500 triple shared by every internal failure.
fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
