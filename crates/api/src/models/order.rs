//! Restaurant point-of-sale orders and their line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use retail_hub_core::{OrderDate, OrderId, OrderItemId, ProductId};

use super::validation::{ValidationError, amount, quantity, reference, required};

/// A POS order (ticket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub date: OrderDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Name called out at the counter, if taken.
    pub customer_name: Option<String>,
    /// Free-form workflow status (e.g. "open", "paid"); not enumerated.
    pub status: Option<String>,
}

/// Validated input for inserting a POS order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub date: OrderDate,
    pub total: Decimal,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub date: Option<String>,
    pub total: Option<Decimal>,
    pub customer_name: Option<String>,
    pub status: Option<String>,
}

impl CreateOrderRequest {
    /// Check the date and total.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewOrder, ValidationError> {
        let date = OrderDate::parse(&required(self.date, "date")?)?;
        Ok(NewOrder {
            date,
            total: amount(self.total, "total")?,
            customer_name: self.customer_name,
            status: self.status,
        })
    }
}

/// A POS line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price at the time of sale.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Validated input for inserting a POS line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: Decimal,
}

/// Body of `POST /api/order_items`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderItemRequest {
    pub order_id: Option<OrderId>,
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

impl CreateOrderItemRequest {
    /// Check references, quantity (at least one) and price.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewOrderItem, ValidationError> {
        Ok(NewOrderItem {
            order_id: reference(self.order_id, "order_id")?,
            product_id: reference(self.product_id, "product_id")?,
            quantity: quantity(self.quantity, "quantity", 1)?,
            price: amount(self.price, "price")?,
        })
    }
}
