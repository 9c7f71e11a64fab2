//! Customer repository for database operations.

use sqlx::SqlitePool;

use retail_hub_core::{CustomerId, Email};

use super::{RepositoryError, map_write_error};
use crate::models::{Customer, NewCustomer};

#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id: CustomerId,
    name: String,
    email: Email,
    address: Option<String>,
    phone: Option<String>,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            address: row.address,
            phone: row.phone,
        }
    }
}

/// Repository for e-commerce customers.
pub struct CustomerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all customers in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r"
            SELECT id, name, email, address, phone
            FROM customers
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    /// Create a new customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, customer: &NewCustomer) -> Result<CustomerId, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO customers (name, email, address, phone)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.phone)
        .execute(self.pool)
        .await
        .map_err(map_write_error)?;

        Ok(CustomerId::new(result.last_insert_rowid()))
    }
}
