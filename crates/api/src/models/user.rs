//! Point-of-sale staff users.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use retail_hub_core::{UserId, Username};

use super::validation::{MIN_PASSWORD_LENGTH, ValidationError, required, required_text};

/// A user as exposed by the API. The password hash never leaves the storage layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    /// Free-form role (e.g. "manager", "server"); not enumerated.
    pub role: String,
}

/// Validated input for inserting a user, password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: String,
}

/// Validated user fields with the password still in clear text.
#[derive(Debug)]
pub struct NewUserCredentials {
    pub username: Username,
    pub password: SecretString,
    pub role: String,
}

/// Body of `POST /api/users`.
///
/// Implements `Debug` manually to redact the password.
#[derive(Default, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("role", &self.role)
            .finish()
    }
}

impl CreateUserRequest {
    /// Check username shape, password length and role.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` naming the first invalid field.
    pub fn validate(self) -> Result<NewUserCredentials, ValidationError> {
        let username = Username::parse(&required(self.username, "username")?)?;

        let password = required(self.password, "password")?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::WeakPassword(MIN_PASSWORD_LENGTH));
        }

        Ok(NewUserCredentials {
            username,
            password: SecretString::from(password),
            role: required_text(self.role, "role")?,
        })
    }
}
