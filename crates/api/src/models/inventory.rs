//! Per-product stock records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use retail_hub_core::{InventoryId, ProductId};

use super::validation::{ValidationError, quantity, reference};

/// A stock record. A product may have several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub id: InventoryId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub last_updated: DateTime<Utc>,
}

/// Validated input for inserting a stock record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInventory {
    pub product_id: ProductId,
    pub quantity: i64,
    pub last_updated: DateTime<Utc>,
}

/// Body of `POST /api/inventory`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateInventoryRequest {
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
    /// RFC 3339 timestamp; the time of the request when omitted.
    pub last_updated: Option<DateTime<Utc>>,
}

impl CreateInventoryRequest {
    /// Check the product reference and quantity (zero allowed).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewInventory, ValidationError> {
        Ok(NewInventory {
            product_id: reference(self.product_id, "product_id")?,
            quantity: quantity(self.quantity, "quantity", 0)?,
            last_updated: self.last_updated.unwrap_or(now),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_last_updated_defaults_to_now() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let request: CreateInventoryRequest =
            serde_json::from_str(r#"{"product_id":1,"quantity":0}"#).unwrap();
        let stock = request.validate(now).unwrap();
        assert_eq!(stock.last_updated, now);
        assert_eq!(stock.quantity, 0);
    }

    #[test]
    fn test_explicit_last_updated() {
        let now = Utc::now();
        let request: CreateInventoryRequest = serde_json::from_str(
            r#"{"product_id":1,"quantity":40,"last_updated":"2024-03-01T08:00:00Z"}"#,
        )
        .unwrap();
        let stock = request.validate(now).unwrap();
        assert_eq!(
            stock.last_updated,
            Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let request = CreateInventoryRequest {
            product_id: Some(ProductId::new(1)),
            quantity: Some(-2),
            last_updated: None,
        };
        assert_eq!(
            request.validate(Utc::now()),
            Err(ValidationError::TooSmall {
                field: "quantity",
                min: 0
            })
        );
    }
}
