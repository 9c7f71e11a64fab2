//! Product repository.

use sqlx::SqlitePool;

use retail_hub_core::ProductId;

use super::{RepositoryError, amount_to_real, map_write_error, real_to_amount};
use crate::models::{NewProduct, Product};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: ProductId,
    name: String,
    description: Option<String>,
    price: f64,
    category: Option<String>,
}

impl TryFrom<ProductRow> for Product {
    type Error = RepositoryError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: real_to_amount(row.price, "price")?,
            category: row.category,
        })
    }
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored price is not a decimal.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, category
            FROM products
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Insert a product and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` for constraint or I/O failures.
    pub async fn create(&self, product: &NewProduct) -> Result<ProductId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO products (name, description, price, category)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(amount_to_real(product.price)?)
        .bind(&product.category)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }
}
