//! Handlers for the `/customers` resource and customer signup.

use axum::extract::{Path, State};
use axum::Json;
use customers_core::types::DbId;
use customers_db::models::customer::Customer;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::services::customers::CustomerAuth;
use crate::state::AppState;

/// Request body for `PUT /customers/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: String,
    pub phone: String,
}

/// GET /customers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.by_id(id).await?;
    Ok(Json(customer))
}

/// GET /customers
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.all().await?;
    Ok(Json(customers))
}

/// GET /customers/active
pub async fn list_active(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.all_active().await?;
    Ok(Json(customers))
}

/// POST /api/customers
///
/// Sign up with name, phone, and password. Returns the new customer.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CustomerAuth>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.create(input).await?;
    Ok(Json(customer))
}

/// PUT /customers/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    JsonBody(input): JsonBody<UpdateCustomerRequest>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.update(id, input.name, input.phone).await?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}
///
/// Returns the customer as it was before deletion.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.remove_by_id(id).await?;
    Ok(Json(customer))
}

/// POST /customers/{id}/block
pub async fn block(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.block_by_id(id).await?;
    Ok(Json(customer))
}

/// DELETE /customers/{id}/block
pub async fn unblock(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Customer>> {
    let customer = state.customers.unblock_by_id(id).await?;
    Ok(Json(customer))
}
