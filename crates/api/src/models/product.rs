//! Catalog products, shared by both domains.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use retail_hub_core::ProductId;

use super::validation::{ValidationError, amount, required_text};

/// A product row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Current list price. Line items keep their own snapshot.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: Option<String>,
}

/// Validated input for inserting a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub category: Option<String>,
}

/// Body of `POST /api/products`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category: Option<String>,
}

impl CreateProductRequest {
    /// Check required fields and amounts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewProduct, ValidationError> {
        Ok(NewProduct {
            name: required_text(self.name, "name")?,
            description: self.description,
            price: amount(self.price, "price")?,
            category: self.category,
        })
    }
}
