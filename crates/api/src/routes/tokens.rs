//! Route definitions for customer tokens.

use axum::routing::post;
use axum::Router;

use crate::handlers::tokens;
use crate::state::AppState;

/// Public token routes, mounted under `/api`.
///
/// ```text
/// POST /customers/token           -> issue
/// POST /customers/token/validate  -> validate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers/token", post(tokens::issue))
        .route("/customers/token/validate", post(tokens::validate))
}
