//! Product route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use retail_hub_core::ProductId;

use super::ListResponse;
use crate::db::ProductRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{CreateProductRequest, Product};
use crate::state::AppState;

/// Response from creating a product.
#[derive(Debug, Serialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
}

/// List all products.
///
/// GET /api/products
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<Product>>> {
    let products = ProductRepository::new(state.pool()).list().await?;
    Ok(Json(products.into()))
}

/// Create a product.
///
/// POST /api/products
///
/// # Errors
///
/// Returns `AppError::Validation` if a required field is missing or invalid.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> Result<Json<ProductCreated>> {
    let product = request.validate()?;
    let product_id = ProductRepository::new(state.pool())
        .create(&product)
        .await?;

    tracing::info!(%product_id, name = %product.name, "Product created");
    Ok(Json(ProductCreated { product_id }))
}
