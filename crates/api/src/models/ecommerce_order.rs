//! E-commerce orders and their line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use retail_hub_core::{CustomerId, EcommerceOrderId, EcommerceOrderItemId, OrderDate, ProductId};

use super::validation::{ValidationError, amount, quantity, reference, required};

/// A web shop order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcommerceOrder {
    pub id: EcommerceOrderId,
    pub date: OrderDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub customer_id: CustomerId,
    /// Free-form fulfilment status; not enumerated.
    pub status: Option<String>,
}

/// Validated input for inserting a web shop order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEcommerceOrder {
    pub date: OrderDate,
    pub total: Decimal,
    pub customer_id: CustomerId,
    pub status: Option<String>,
}

/// Body of `POST /api/ecommerce_orders`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEcommerceOrderRequest {
    pub date: Option<String>,
    pub total: Option<Decimal>,
    pub customer_id: Option<CustomerId>,
    pub status: Option<String>,
}

impl CreateEcommerceOrderRequest {
    /// Check the date, total and customer reference.
    ///
    /// The customer's existence is checked by the storage layer.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewEcommerceOrder, ValidationError> {
        let date = OrderDate::parse(&required(self.date, "date")?)?;
        Ok(NewEcommerceOrder {
            date,
            total: amount(self.total, "total")?,
            customer_id: reference(self.customer_id, "customer_id")?,
            status: self.status,
        })
    }
}

/// A web shop line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EcommerceOrderItem {
    pub id: EcommerceOrderItemId,
    pub order_id: EcommerceOrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    /// Unit price at checkout.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Validated input for inserting a web shop line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEcommerceOrderItem {
    pub order_id: EcommerceOrderId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub price: Decimal,
}

/// Body of `POST /api/ecommerce_order_items`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateEcommerceOrderItemRequest {
    pub order_id: Option<EcommerceOrderId>,
    pub product_id: Option<ProductId>,
    pub quantity: Option<i64>,
    pub price: Option<Decimal>,
}

impl CreateEcommerceOrderItemRequest {
    /// Check references, quantity (at least one) and price.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewEcommerceOrderItem, ValidationError> {
        Ok(NewEcommerceOrderItem {
            order_id: reference(self.order_id, "order_id")?,
            product_id: reference(self.product_id, "product_id")?,
            quantity: quantity(self.quantity, "quantity", 1)?,
            price: amount(self.price, "price")?,
        })
    }
}
