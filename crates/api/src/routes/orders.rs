//! Point-of-sale order and line-item route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use retail_hub_core::{OrderId, OrderItemId};

use super::ListResponse;
use crate::db::OrderRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{CreateOrderItemRequest, CreateOrderRequest, Order, OrderItem};
use crate::state::AppState;

/// Response from creating a POS order.
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    pub order_id: OrderId,
}

/// Response from creating a POS line item.
#[derive(Debug, Serialize)]
pub struct OrderItemCreated {
    pub order_item_id: OrderItemId,
}

/// List all POS orders.
///
/// GET /api/orders
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<Order>>> {
    let orders = OrderRepository::new(state.pool()).list().await?;
    Ok(Json(orders.into()))
}

/// Create a POS order.
///
/// POST /api/orders
///
/// # Errors
///
/// Returns `AppError::Validation` if a required field is missing or invalid.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderRequest>,
) -> Result<Json<OrderCreated>> {
    let order = request.validate()?;
    let order_id = OrderRepository::new(state.pool()).create(&order).await?;

    tracing::info!(%order_id, date = %order.date, "POS order created");
    Ok(Json(OrderCreated { order_id }))
}

/// List all POS line items.
///
/// GET /api/order_items
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails.
pub async fn index_items(State(state): State<AppState>) -> Result<Json<ListResponse<OrderItem>>> {
    let items = OrderRepository::new(state.pool()).list_items().await?;
    Ok(Json(items.into()))
}

/// Add a line item to a POS order.
///
/// POST /api/order_items
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the order or product does not exist.
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateOrderItemRequest>,
) -> Result<Json<OrderItemCreated>> {
    let item = request.validate()?;
    let order_item_id = OrderRepository::new(state.pool())
        .create_item(&item)
        .await?;

    tracing::info!(%order_item_id, order_id = %item.order_id, "POS line item created");
    Ok(Json(OrderItemCreated { order_item_id }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::test_app;

    #[tokio::test]
    async fn test_create_order_with_line_item() {
        let app = test_app().await;
        app.post("/api/products", r#"{"name":"Espresso","price":2.5}"#)
            .await;

        let (status, body) = app
            .post(
                "/api/orders",
                r#"{"date":"2024-03-14","total":5.0,"customer_name":"Table 4","status":"open"}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_id": 1 }));

        let (status, body) = app
            .post(
                "/api/order_items",
                r#"{"order_id":1,"product_id":1,"quantity":2,"price":2.5}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "order_item_id": 1 }));

        let (_, body) = app.get("/api/orders").await;
        assert_eq!(
            body["data"],
            json!([{
                "id": 1,
                "date": "2024-03-14",
                "total": 5.0,
                "customer_name": "Table 4",
                "status": "open",
            }])
        );

        let (_, body) = app.get("/api/order_items").await;
        assert_eq!(body["data"][0]["quantity"], 2);
        assert_eq!(body["data"][0]["price"], 2.5);
    }

    #[tokio::test]
    async fn test_invalid_date_is_unprocessable() {
        let app = test_app().await;
        let (status, body) = app
            .post("/api/orders", r#"{"date":"14/03/2024","total":5.0}"#)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "validation");
    }

    #[tokio::test]
    async fn test_line_item_for_missing_order_conflicts() {
        let app = test_app().await;
        app.post("/api/products", r#"{"name":"Espresso","price":2.5}"#)
            .await;

        let (status, body) = app
            .post(
                "/api/order_items",
                r#"{"order_id":7,"product_id":1,"quantity":1,"price":2.5}"#,
            )
            .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["kind"], "foreign_key");
    }
}
