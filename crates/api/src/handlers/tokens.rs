//! Handlers for customer token issuance and validation.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use customers_core::error::SecurityError;
use customers_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/customers/token`. `login` is the phone.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub login: String,
    pub password: String,
}

/// Carries a token in either direction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

/// Body returned for a valid token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccepted {
    pub status: &'static str,
    pub customer_id: DbId,
}

/// Body returned for an unknown or expired token.
#[derive(Debug, Serialize)]
pub struct TokenRejected {
    pub status: &'static str,
    pub reason: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/customers/token
///
/// Exchange phone + password for a new session token.
pub async fn issue(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TokenRequest>,
) -> AppResult<Json<TokenBody>> {
    let token = state
        .customers
        .token_for_customer(&input.login, &input.password)
        .await?;
    Ok(Json(TokenBody { token }))
}

/// POST /api/customers/token/validate
///
/// 200 with the owner's id, 404 for an unknown token, 400 for an expired
/// one, and 500 with an empty body for anything else.
pub async fn validate(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TokenBody>,
) -> Response {
    match state.security.authenticate_customer(&input.token).await {
        Ok(customer_id) => Json(TokenAccepted {
            status: "ok",
            customer_id,
        })
        .into_response(),
        Err(SecurityError::NoSuchUser) => rejected(StatusCode::NOT_FOUND, "not found"),
        Err(SecurityError::Expired) => rejected(StatusCode::BAD_REQUEST, "expired"),
        Err(SecurityError::Internal(msg)) => {
            tracing::error!(error = %msg, "Token validation failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn rejected(status: StatusCode, reason: &'static str) -> Response {
    (
        status,
        Json(TokenRejected {
            status: "fail",
            reason,
        }),
    )
        .into_response()
}
