//! Database operations for the Retail Hub SQLite data file.
//!
//! # Tables
//!
//! Restaurant point-of-sale:
//! - `products` - Menu/catalog items, shared with e-commerce
//! - `orders` - POS tickets
//! - `order_items` - POS line items (price snapshot per line)
//! - `inventory` - Stock records per product
//! - `users` - POS staff logins (Argon2 password hashes)
//!
//! E-commerce:
//! - `customers` - Web shop customers (unique email)
//! - `ecommerce_orders` - Web shop orders
//! - `ecommerce_order_items` - Web shop line items
//!
//! # Schema setup
//!
//! [`init_schema`] runs the embedded migrations in `crates/api/migrations/`.
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so it is safe to run
//! against a fresh file, an already-initialized file, or a data file created
//! by earlier tooling. The server runs it at startup; operators can also run:
//! ```bash
//! cargo run -p retail-hub-cli -- migrate
//! ```

pub mod customers;
pub mod ecommerce_orders;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod users;

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

use crate::config::DatabaseConfig;

pub use customers::CustomerRepository;
pub use ecommerce_orders::EcommerceOrderRepository;
pub use inventory::InventoryRepository;
pub use orders::OrderRepository;
pub use products::ProductRepository;
pub use users::UserRepository;

/// How long a connection waits on a locked database before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// A value could not be converted to its column representation.
    #[error("unrepresentable value: {0}")]
    Unrepresentable(String),

    /// Unique constraint violation (e.g., duplicate email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Referenced parent row does not exist.
    #[error("foreign key violation: {0}")]
    ForeignKey(String),
}

/// Create a SQLite connection pool for the configured data file.
///
/// The file is created if missing. Every pooled connection enforces foreign
/// keys and uses WAL journaling so readers don't block the single writer.
///
/// # Errors
///
/// Returns `sqlx::Error` if the file cannot be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(&config.path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Create all tables that don't exist yet.
///
/// # Errors
///
/// Returns `MigrateError` if a statement fails or a previously applied
/// migration was modified.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Classify a failed INSERT into the repository error taxonomy.
fn map_write_error(e: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e {
        if db_err.is_unique_violation() {
            return RepositoryError::Conflict(db_err.message().to_owned());
        }
        if db_err.is_foreign_key_violation() {
            return RepositoryError::ForeignKey(db_err.message().to_owned());
        }
    }
    RepositoryError::Database(e)
}

/// Convert a decimal amount to its `REAL` column value.
///
/// Fails unless the stored value converts back to a decimal, so nothing is
/// written that [`real_to_amount`] would later reject.
fn amount_to_real(amount: Decimal) -> Result<f64, RepositoryError> {
    amount
        .to_f64()
        .filter(|v| v.is_finite() && Decimal::from_f64(*v).is_some())
        .ok_or_else(|| RepositoryError::Unrepresentable(format!("amount {amount}")))
}

/// Convert a `REAL` column value back to a decimal amount.
fn real_to_amount(value: f64, column: &str) -> Result<Decimal, RepositoryError> {
    Decimal::from_f64(value).ok_or_else(|| {
        RepositoryError::DataCorruption(format!("{column} {value} is not a decimal amount"))
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;
    use tempfile::TempDir;

    use super::{create_pool, init_schema};
    use crate::config::DatabaseConfig;

    /// A freshly initialized data file that is deleted on drop.
    pub struct TestDb {
        pub pool: SqlitePool,
        pub config: DatabaseConfig,
        _dir: TempDir,
    }

    #[allow(clippy::expect_used)]
    pub async fn test_db() -> TestDb {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = DatabaseConfig::at(dir.path().join("test.sqlite"));
        let pool = create_pool(&config).await.expect("open pool");
        init_schema(&pool).await.expect("init schema");
        TestDb {
            pool,
            config,
            _dir: dir,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::test_support::test_db;
    use super::*;

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' \
             AND name NOT LIKE 'sqlite_%' AND name NOT LIKE '_sqlx%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_init_schema_creates_all_tables() {
        let db = test_db().await;
        assert_eq!(
            table_names(&db.pool).await,
            vec![
                "customers",
                "ecommerce_order_items",
                "ecommerce_orders",
                "inventory",
                "order_items",
                "orders",
                "products",
                "users",
            ]
        );
    }

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let db = test_db().await;
        sqlx::query("INSERT INTO products (name, price) VALUES ('Espresso', 2.5)")
            .execute(&db.pool)
            .await
            .unwrap();

        init_schema(&db.pool).await.unwrap();

        // Reopen the same file and run setup again
        db.pool.close().await;
        let pool = create_pool(&db.config).await.unwrap();
        init_schema(&pool).await.unwrap();

        assert_eq!(table_names(&pool).await.len(), 8);
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_amount_to_real_rejects_values_that_cannot_be_read_back() {
        assert_eq!(amount_to_real(Decimal::new(1150, 2)).unwrap(), 11.5);
        assert!(matches!(
            amount_to_real(Decimal::MAX),
            Err(RepositoryError::Unrepresentable(_))
        ));
    }

    #[tokio::test]
    async fn test_init_schema_adopts_existing_tables() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::at(dir.path().join("legacy.sqlite"));
        let pool = create_pool(&config).await.unwrap();

        // A data file created before migrations were tracked
        sqlx::query(
            "CREATE TABLE customers (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, \
             email TEXT NOT NULL UNIQUE, address TEXT, phone TEXT)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO customers (name, email) VALUES ('Ada', 'ada@x.com')")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();

        assert_eq!(table_names(&pool).await.len(), 8);
        let email: String = sqlx::query_scalar("SELECT email FROM customers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(email, "ada@x.com");
    }

    #[tokio::test]
    async fn test_foreign_keys_enforced() {
        let db = test_db().await;
        let err = sqlx::query(
            "INSERT INTO inventory (product_id, quantity, last_updated) VALUES (99, 1, 'now')",
        )
        .execute(&db.pool)
        .await
        .unwrap_err();
        assert!(matches!(
            map_write_error(err),
            RepositoryError::ForeignKey(_)
        ));
    }

    #[test]
    fn test_amount_conversions() {
        let amount = Decimal::new(1250, 2);
        let real = amount_to_real(amount).unwrap();
        assert!((real - 12.5).abs() < f64::EPSILON);
        assert_eq!(real_to_amount(real, "price").unwrap(), amount);
        assert!(matches!(
            real_to_amount(f64::NAN, "price"),
            Err(RepositoryError::DataCorruption(_))
        ));
    }
}
