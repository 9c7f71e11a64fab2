//! E-commerce order and line-item repository.

use sqlx::SqlitePool;

use retail_hub_core::{CustomerId, EcommerceOrderId, EcommerceOrderItemId, OrderDate, ProductId};

use super::{RepositoryError, amount_to_real, map_write_error, real_to_amount};
use crate::models::{EcommerceOrder, EcommerceOrderItem, NewEcommerceOrder, NewEcommerceOrderItem};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct EcommerceOrderRow {
    id: EcommerceOrderId,
    date: OrderDate,
    total: f64,
    customer_id: CustomerId,
    status: Option<String>,
}

impl TryFrom<EcommerceOrderRow> for EcommerceOrder {
    type Error = RepositoryError;

    fn try_from(row: EcommerceOrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            date: row.date,
            total: real_to_amount(row.total, "total")?,
            customer_id: row.customer_id,
            status: row.status,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EcommerceOrderItemRow {
    id: EcommerceOrderItemId,
    order_id: EcommerceOrderId,
    product_id: ProductId,
    quantity: i64,
    price: f64,
}

impl TryFrom<EcommerceOrderItemRow> for EcommerceOrderItem {
    type Error = RepositoryError;

    fn try_from(row: EcommerceOrderItemRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
            price: real_to_amount(row.price, "price")?,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for web shop orders and their line items.
pub struct EcommerceOrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> EcommerceOrderRepository<'a> {
    /// Create a new e-commerce order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all web shop orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<EcommerceOrder>, RepositoryError> {
        let rows = sqlx::query_as::<_, EcommerceOrderRow>(
            r"
            SELECT id, date, total, customer_id, status
            FROM ecommerce_orders
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(EcommerceOrder::try_from).collect()
    }

    /// Insert an order for an existing customer and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the customer does not exist.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create(
        &self,
        order: &NewEcommerceOrder,
    ) -> Result<EcommerceOrderId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO ecommerce_orders (date, total, customer_id, status)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&order.date)
        .bind(amount_to_real(order.total)?)
        .bind(order.customer_id)
        .bind(&order.status)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(EcommerceOrderId::new(result.last_insert_rowid()))
    }

    /// List all web shop line items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_items(&self) -> Result<Vec<EcommerceOrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, EcommerceOrderItemRow>(
            r"
            SELECT id, order_id, product_id, quantity, price
            FROM ecommerce_order_items
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(EcommerceOrderItem::try_from).collect()
    }

    /// Insert a line item and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the order or product does not exist.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create_item(
        &self,
        item: &NewEcommerceOrderItem,
    ) -> Result<EcommerceOrderItemId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO ecommerce_order_items (order_id, product_id, quantity, price)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(item.order_id)
        .bind(item.product_id)
        .bind(item.quantity)
        .bind(amount_to_real(item.price)?)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(EcommerceOrderItemId::new(result.last_insert_rowid()))
    }
}
