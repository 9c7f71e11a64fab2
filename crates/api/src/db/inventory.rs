//! Inventory repository.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;

use retail_hub_core::{InventoryId, ProductId};

use super::{RepositoryError, map_write_error};
use crate::models::{Inventory, NewInventory};

/// Internal row type for inventory queries.
///
/// `last_updated` is RFC 3339 text on disk.
#[derive(Debug, sqlx::FromRow)]
struct InventoryRow {
    id: InventoryId,
    product_id: ProductId,
    quantity: i64,
    last_updated: String,
}

impl TryFrom<InventoryRow> for Inventory {
    type Error = RepositoryError;

    fn try_from(row: InventoryRow) -> Result<Self, Self::Error> {
        let last_updated = DateTime::parse_from_rfc3339(&row.last_updated)
            .map_err(|e| {
                RepositoryError::DataCorruption(format!(
                    "invalid last_updated {:?} for inventory {}: {e}",
                    row.last_updated, row.id
                ))
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id: row.id,
            product_id: row.product_id,
            quantity: row.quantity,
            last_updated,
        })
    }
}

/// Repository for stock records.
pub struct InventoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InventoryRepository<'a> {
    /// Create a new inventory repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all stock records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a timestamp cannot be parsed.
    pub async fn list(&self) -> Result<Vec<Inventory>, RepositoryError> {
        let rows = sqlx::query_as::<_, InventoryRow>(
            r"
            SELECT id, product_id, quantity, last_updated
            FROM inventory
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(Inventory::try_from).collect()
    }

    /// Insert a stock record and return its new ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKey` if the product does not exist.
    /// Returns `RepositoryError::Database` for other failures.
    pub async fn create(&self, stock: &NewInventory) -> Result<InventoryId, RepositoryError> {
        let last_updated = stock
            .last_updated
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);

        let result = sqlx::query(
            r"
            INSERT INTO inventory (product_id, quantity, last_updated)
            VALUES (?, ?, ?)
            ",
        )
        .bind(stock.product_id)
        .bind(stock.quantity)
        .bind(last_updated)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(InventoryId::new(result.last_insert_rowid()))
    }
}
