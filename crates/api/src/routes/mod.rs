pub mod customers;
pub mod health;
pub mod tokens;

use axum::Router;

use crate::state::AppState;

/// Build the customer-facing `/api` route tree.
///
/// ```text
/// POST /api/customers                   signup
/// POST /api/customers/token             issue token
/// POST /api/customers/token/validate    validate token
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(customers::signup_router())
        .merge(tokens::router())
}
