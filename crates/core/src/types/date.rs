//! Order date type.
//!
//! Orders carry a calendar date or a full timestamp depending on which front
//! end submitted them. Both shapes are accepted and stored verbatim.

use core::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`OrderDate`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderDateError {
    /// The input string is empty (after trimming).
    #[error("date cannot be empty")]
    Empty,
    /// Neither a `YYYY-MM-DD` date nor an RFC 3339 timestamp.
    #[error("date must be YYYY-MM-DD or an RFC 3339 timestamp, got {0:?}")]
    Format(String),
}

/// The date an order was placed.
///
/// ```
/// use retail_hub_core::OrderDate;
///
/// assert!(OrderDate::parse("2024-03-01").is_ok());
/// assert!(OrderDate::parse("2024-03-01T18:45:00Z").is_ok());
/// assert!(OrderDate::parse("yesterday").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderDate(String);

impl OrderDate {
    /// Parse an `OrderDate`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDateError::Empty`] for blank input and
    /// [`OrderDateError::Format`] when the value is neither shape.
    pub fn parse(s: &str) -> Result<Self, OrderDateError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OrderDateError::Empty);
        }

        let is_date = NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok();
        if !is_date && DateTime::parse_from_rfc3339(s).is_err() {
            return Err(OrderDateError::Format(s.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the date as submitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for OrderDate {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for OrderDate {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        Ok(Self(s))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for OrderDate {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}
