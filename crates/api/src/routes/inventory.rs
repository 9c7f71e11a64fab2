//! Inventory route handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use retail_hub_core::InventoryId;

use super::ListResponse;
use crate::db::InventoryRepository;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::models::{CreateInventoryRequest, Inventory};
use crate::state::AppState;

/// Response from creating a stock record.
#[derive(Debug, Serialize)]
pub struct InventoryCreated {
    pub inventory_id: InventoryId,
}

/// List all stock records.
///
/// GET /api/inventory
///
/// # Errors
///
/// Returns `AppError::Repository` if the query fails or a stored timestamp is corrupt.
pub async fn index(State(state): State<AppState>) -> Result<Json<ListResponse<Inventory>>> {
    let records = InventoryRepository::new(state.pool()).list().await?;
    Ok(Json(records.into()))
}

/// Create a stock record, stamped now unless `last_updated` is given.
///
/// POST /api/inventory
///
/// # Errors
///
/// Returns `AppError::Validation` for invalid fields and
/// `AppError::Repository` if the product does not exist.
pub async fn create(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateInventoryRequest>,
) -> Result<Json<InventoryCreated>> {
    let record = request.validate(Utc::now())?;
    let inventory_id = InventoryRepository::new(state.pool())
        .create(&record)
        .await?;

    tracing::info!(
        %inventory_id,
        product_id = %record.product_id,
        quantity = record.quantity,
        "Stock record created"
    );
    Ok(Json(InventoryCreated { inventory_id }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::routes::test_support::test_app;

    #[tokio::test]
    async fn test_create_with_explicit_timestamp() {
        let app = test_app().await;
        app.post("/api/products", r#"{"name":"Flour 25kg","price":18.0}"#)
            .await;

        let (status, body) = app
            .post(
                "/api/inventory",
                r#"{"product_id":1,"quantity":0,"last_updated":"2024-05-01T06:30:00Z"}"#,
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "inventory_id": 1 }));

        let (_, body) = app.get("/api/inventory").await;
        assert_eq!(
            body["data"],
            json!([{
                "id": 1,
                "product_id": 1,
                "quantity": 0,
                "last_updated": "2024-05-01T06:30:00Z",
            }])
        );
    }

    #[tokio::test]
    async fn test_create_stamps_now() {
        let app = test_app().await;
        app.post("/api/products", r#"{"name":"Flour 25kg","price":18.0}"#)
            .await;

        let (status, _) = app
            .post("/api/inventory", r#"{"product_id":1,"quantity":40}"#)
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = app.get("/api/inventory").await;
        let stamp = body["data"][0]["last_updated"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[tokio::test]
    async fn test_negative_quantity_rejected() {
        let app = test_app().await;
        let (status, body) = app
            .post("/api/inventory", r#"{"product_id":1,"quantity":-3}"#)
            .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "quantity must be at least 0");
    }
}
