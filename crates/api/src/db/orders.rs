//! POS order and line-item repository.

use sqlx::SqlitePool;

use retail_hub_core::{OrderDate, OrderId, OrderItemId, ProductId};

use super::{RepositoryError, amount_to_real, map_write_error, real_to_amount};
use crate::models::{NewOrder, NewOrderItem, Order, OrderItem};

// =============================================================================
// Internal Row Types
// =============================================================================

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: OrderId,
    date: OrderDate,
    total: f64,
    customer_name: Option<String>,
    status: Option<String>,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            date: row.date,
            total: real_to_amount(row.total, "total")?,
            customer_name: row.customer_name,
            status: row.status,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: OrderItemId,
    order_id: OrderId,
    product_id: ProductId,
    quantity: i64,
    price: f64,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
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

/// Repository for point-of-sale orders and their line items.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r"
            SELECT id, date, total, customer_name, status
            FROM orders
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    /// Insert an order and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` for constraint or I/O failures.
    pub async fn create(&self, order: &NewOrder) -> Result<OrderId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO orders (date, total, customer_name, status)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&order.date)
        .bind(amount_to_real(order.total)?)
        .bind(&order.customer_name)
        .bind(&order.status)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(OrderId::new(result.last_insert_rowid()))
    }

    /// List all line items across orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_items(&self) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, order_id, product_id, quantity, price
            FROM order_items
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderItem::try_from).collect()
    }

    /// Insert a line item and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the order or product does not exist.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create_item(&self, item: &NewOrderItem) -> Result<OrderItemId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO order_items (order_id, product_id, quantity, price)
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

        Ok(OrderItemId::new(result.last_insert_rowid()))
    }
}
