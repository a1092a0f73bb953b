//! Route definitions for the `/customers` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Manager-facing customer routes.
///
/// ```text
/// GET    /customers             -> list_all
/// GET    /customers/active      -> list_active
/// GET    /customers/{id}        -> get_by_id
/// PUT    /customers/{id}        -> update
/// DELETE /customers/{id}        -> remove
/// POST   /customers/{id}/block  -> block
/// DELETE /customers/{id}/block  -> unblock
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::list_all))
        .route("/customers/active", get(customers::list_active))
        .route(
            "/customers/{id}",
            get(customers::get_by_id)
                .put(customers::update)
                .delete(customers::remove),
        )
        .route(
            "/customers/{id}/block",
            post(customers::block).delete(customers::unblock),
        )
}

/// Public signup route, mounted under `/api`.
///
/// ```text
/// POST /customers -> create
/// ```
pub fn signup_router() -> Router<AppState> {
    Router::new().route("/customers", post(customers::create))
}
