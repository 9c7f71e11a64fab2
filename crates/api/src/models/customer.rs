//! E-commerce customers.

use serde::{Deserialize, Serialize};

use retail_hub_core::{CustomerId, Email};

use super::validation::{ValidationError, required, required_text};

/// A web shop customer. Email is unique across customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Validated input for inserting a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: Email,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Body of `POST /api/customers`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl CreateCustomerRequest {
    /// Check name and email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewCustomer, ValidationError> {
        let name = required_text(self.name, "name")?;
        let email = Email::parse(&required(self.email, "email")?)?;
        Ok(NewCustomer {
            name,
            email,
            address: self.address,
            phone: self.phone,
        })
    }
}
