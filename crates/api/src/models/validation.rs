//! Request body validation.
//!
//! Every create endpoint decodes its body into a request struct whose fields
//! are all optional, then validates it into a typed input. Missing or
//! malformed fields are reported here, before any storage call.

use rust_decimal::Decimal;
use thiserror::Error;

use retail_hub_core::{EmailError, OrderDateError, UsernameError};

/// Minimum password length for new users.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Largest accepted amount, in whole currency units.
///
/// Amounts are stored as `REAL`; anything larger cannot be read back as a
/// decimal reliably.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// A request field failed validation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field absent or `null`.
    #[error("{0} is required")]
    Missing(&'static str),

    /// Field present but of the wrong JSON type.
    #[error("{0}")]
    Malformed(String),

    /// Required text field contains only whitespace.
    #[error("{0} cannot be blank")]
    Blank(&'static str),

    /// Amount below zero.
    #[error("{0} cannot be negative")]
    Negative(&'static str),

    /// Amount above [`MAX_AMOUNT`].
    #[error("{0} cannot exceed {max}", max = MAX_AMOUNT)]
    TooLarge(&'static str),

    /// Quantity below the allowed minimum.
    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: i64 },

    /// Reference id that no row could have.
    #[error("{0} must be a positive id")]
    InvalidReference(&'static str),

    /// Malformed email address.
    #[error("email is invalid: {0}")]
    Email(#[from] EmailError),

    /// Malformed username.
    #[error("username is invalid: {0}")]
    Username(#[from] UsernameError),

    /// Malformed order date.
    #[error("date is invalid: {0}")]
    Date(#[from] OrderDateError),

    /// Password shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {0} characters")]
    WeakPassword(usize),
}

/// Unwrap a required field.
pub fn required<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError> {
    value.ok_or(ValidationError::Missing(field))
}

/// Unwrap a required text field, rejecting whitespace-only values.
///
/// The value is returned exactly as submitted.
pub fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    let value = required(value, field)?;
    if value.trim().is_empty() {
        return Err(ValidationError::Blank(field));
    }
    Ok(value)
}

/// Unwrap a required amount between zero and [`MAX_AMOUNT`].
pub fn amount(value: Option<Decimal>, field: &'static str) -> Result<Decimal, ValidationError> {
    let value = required(value, field)?;
    if value < Decimal::ZERO {
        return Err(ValidationError::Negative(field));
    }
    if value > Decimal::from(MAX_AMOUNT) {
        return Err(ValidationError::TooLarge(field));
    }
    Ok(value)
}

/// Unwrap a required quantity of at least `min`.
pub fn quantity(value: Option<i64>, field: &'static str, min: i64) -> Result<i64, ValidationError> {
    let value = required(value, field)?;
    if value < min {
        return Err(ValidationError::TooSmall { field, min });
    }
    Ok(value)
}

/// Unwrap a required reference to another row.
pub fn reference<T>(value: Option<T>, field: &'static str) -> Result<T, ValidationError>
where
    T: Copy + Into<i64>,
{
    let value = required(value, field)?;
    if value.into() <= 0 {
        return Err(ValidationError::InvalidReference(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use retail_hub_core::ProductId;

    use super::*;

    #[test]
    fn test_required_text() {
        assert_eq!(
            required_text(None, "name"),
            Err(ValidationError::Missing("name"))
        );
        assert_eq!(
            required_text(Some("  \t".to_string()), "name"),
            Err(ValidationError::Blank("name"))
        );
        assert_eq!(
            required_text(Some(" Flat white ".to_string()), "name"),
            Ok(" Flat white ".to_string())
        );
    }

    #[test]
    fn test_amount() {
        assert_eq!(amount(None, "price"), Err(ValidationError::Missing("price")));
        assert_eq!(
            amount(Some(Decimal::new(-1, 2)), "price"),
            Err(ValidationError::Negative("price"))
        );
        assert_eq!(amount(Some(Decimal::ZERO), "price"), Ok(Decimal::ZERO));
        assert_eq!(
            amount(Some(Decimal::new(-0, 2)), "total"),
            Ok(Decimal::new(0, 2))
        );
    }

    #[test]
    fn test_amount_upper_bound() {
        let max = Decimal::from(MAX_AMOUNT);
        assert_eq!(amount(Some(max), "total"), Ok(max));
        assert_eq!(
            amount(Some(max + Decimal::new(1, 2)), "total"),
            Err(ValidationError::TooLarge("total"))
        );
        assert_eq!(
            amount(Some(Decimal::MAX), "price"),
            Err(ValidationError::TooLarge("price"))
        );
        assert_eq!(
            ValidationError::TooLarge("price").to_string(),
            "price cannot exceed 1000000000000"
        );
    }

    #[test]
    fn test_quantity() {
        assert_eq!(
            quantity(Some(0), "quantity", 1),
            Err(ValidationError::TooSmall {
                field: "quantity",
                min: 1
            })
        );
        assert_eq!(quantity(Some(0), "quantity", 0), Ok(0));
    }

    #[test]
    fn test_reference() {
        assert_eq!(
            reference(Some(ProductId::new(0)), "product_id"),
            Err(ValidationError::InvalidReference("product_id"))
        );
        assert_eq!(
            reference(Some(ProductId::new(3)), "product_id"),
            Ok(ProductId::new(3))
        );
        assert_eq!(
            reference::<ProductId>(None, "product_id"),
            Err(ValidationError::Missing("product_id"))
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        assert_eq!(
            ValidationError::Missing("price").to_string(),
            "price is required"
        );
        assert_eq!(
            ValidationError::TooSmall {
                field: "quantity",
                min: 1
            }
            .to_string(),
            "quantity must be at least 1"
        );
    }
}
