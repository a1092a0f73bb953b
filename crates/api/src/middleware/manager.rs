//! Manager Basic-auth extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::auth::basic::parse_basic_header;
use crate::error::AppError;
use crate::state::AppState;

/// A request carrying valid manager credentials.
///
/// Mounted on the `/customers` routes with
/// `axum::middleware::from_extractor_with_state` when
/// `MANAGER_AUTH_ENABLED` is set; can also be taken directly as a handler
/// argument.
#[derive(Debug, Clone)]
pub struct RequireManager {
    pub login: String,
}

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".into()))?;

        let creds = parse_basic_header(header).ok_or_else(|| {
            AppError::Unauthorized(
                "Invalid Authorization format. Expected: Basic <credentials>".into(),
            )
        })?;

        if !state.security.auth(&creds.login, &creds.password).await {
            return Err(AppError::Unauthorized("Invalid login or password".into()));
        }

        Ok(RequireManager { login: creds.login })
    }
}
