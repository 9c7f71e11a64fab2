//! E-commerce order and line-item route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use retail_hub_core::{EcommerceOrderId, EcommerceOrderItemId};

use super::ListResponse;
use crate::db::EcommerceOrderRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{
    CreateEcommerceOrderItemRequest, CreateEcommerceOrderRequest, EcommerceOrder,
    EcommerceOrderItem,
};
use crate::state::AppState;

/// Response from creating a web order.
#[derive(Debug, Serialize)]
pub struct EcommerceOrderCreated {
    pub order_id: EcommerceOrderId,
}

/// Response from creating a web line item.
#[derive(Debug, Serialize)]
pub struct EcommerceOrderItemCreated {
    pub order_item_id: EcommerceOrderItemId,
}

/// List all web orders.
///
/// GET /api/ecommerce_orders
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<EcommerceOrder>>> {
    let orders = EcommerceOrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders.into()))
}

/// Create a web order for an existing customer.
///
/// POST /api/ecommerce_orders
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the customer does not exist.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateEcommerceOrderRequest>,
) -> Result<Json<EcommerceOrderCreated>> {
    let order = request.validate()?;
    let order_id = EcommerceOrderRepository::new(state.pool())
        .create(&order)
        .await?;

    tracing::info!(%order_id, customer_id = %order.customer_id, "Web order created");
    Ok(Json(EcommerceOrderCreated { order_id }))
}

/// List all web line items.
///
/// GET /api/ecommerce_order_items
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index_items(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<EcommerceOrderItem>>> {
    let items = EcommerceOrderRepository::new(state.pool())
        .list_items()
        .await?;
    Ok(Json(items.into()))
}

/// Add a line item to a web order.
///
/// POST /api/ecommerce_order_items
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the order or product does not exist.
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateEcommerceOrderItemRequest>,
) -> Result<Json<EcommerceOrderItemCreated>> {
    let item = request.validate()?;
    let order_item_id = EcommerceOrderRepository::new(state.pool())
        .create_item(&item)
        .await?;

    tracing::info!(%order_item_id, order_id = %item.order_id, "Web line item created");
    Ok(Json(EcommerceOrderItemCreated { order_item_id }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::test_app;

    #[tokio::test]
    async fn test_unknown_customer_is_foreign_key_error() {
        let app = test_app().await;
        let (status, body) = app
            .post(
                "/api/ecommerce_orders",
                r#"{"date":"2024-07-01","total":49.5,"customer_id":12,"status":"pending"}"#,
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["kind"], "foreign_key");

        let (_, body) = app.get("/api/ecommerce_orders").await;
        assert_eq!(body["data"], json!([]));
    }

    #[tokio::test]
    async fn test_order_with_line_item() {
        let app = test_app().await;
        app.post("/api/customers", r#"{"name":"Grace","email":"grace@navy.example"}"#)
            .await;
        app.post("/api/products", r#"{"name":"Gift card","price":25.0}"#)
            .await;

        let (status, body) = app
            .post(
                "/api/ecommerce_orders",
                r#"{"date":"2024-07-01T10:00:00Z","total":50.0,"customer_id":1}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_id": 1 }));

        let (status, body) = app
            .post(
                "/api/ecommerce_order_items",
                r#"{"order_id":1,"product_id":1,"quantity":2,"price":25.0}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_item_id": 1 }));

        let (_, body) = app.get("/api/ecommerce_orders").await;
        assert_eq!(
            body["data"],
            json!([{
                "id": 1,
                "date": "2024-07-01T10:00:00Z",
                "total": 50.0,
                "customer_id": 1,
                "status": null,
            }])
        );

        let (_, body) = app.get("/api/ecommerce_order_items").await;
        assert_eq!(body["data"][0]["order_id"], 1);
    }

    #[tokio::test]
    async fn test_missing_customer_id_is_unprocessable() {
        let app = test_app().await;
        let (status, body) = app
            .post("/api/ecommerce_orders", r#"{"date":"2024-07-01","total":1.0}"#)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "customer_id is required");
    }
}
