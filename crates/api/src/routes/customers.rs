//! E-commerce customer route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use retail_hub_core::CustomerId;

use super::ListResponse;
use crate::db::CustomerRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{CreateCustomerRequest, Customer};
use crate::state::AppState;

/// Response from creating a customer.
#[derive(Debug, Serialize)]
pub struct CustomerCreated {
    pub customer_id: CustomerId,
}

/// List all customers.
///
/// GET /api/customers
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<Customer>>> {
    let customers = CustomerRepository::new(state.pool()).list().await?;
    Ok(Json(customers.into()))
}

/// Create a customer.
///
/// POST /api/customers
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the email is already registered.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCustomerRequest>,
) -> Result<Json<CustomerCreated>> {
    let customer = request.validate()?;
    let customer_id = CustomerRepository::new(state.pool())
        .create(&customer)
        .await?;

    tracing::info!(%customer_id, email_domain = %customer.email.domain(), "Customer created");
    Ok(Json(CustomerCreated { customer_id }))
}
