//! Password hashing for point-of-sale users.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::models::{NewUser, NewUserCredentials};

/// Errors that can occur while hashing a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Argon2 rejected the input or parameters.
    #[error("password hashing error")]
    Hash,

    /// The blocking hashing task panicked or was cancelled.
    #[error("password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Hash a password using Argon2id with a random salt.
///
/// Returns the PHC string stored in the `users.password` column.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if hashing fails.
pub fn hash_password(password: &SecretString) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| PasswordError::Hash)
}

/// Hash a password on the blocking thread pool.
///
/// Argon2 is CPU-bound and must not run on an async worker thread.
///
/// # Errors
///
/// Returns `PasswordError` if hashing fails or the task is cancelled.
pub async fn hash_password_blocking(password: SecretString) -> Result<String, PasswordError> {
    tokio::task::spawn_blocking(move || hash_password(&password)).await?
}

/// Hash the submitted password, producing the row to insert.
///
/// # Errors
///
/// Returns `PasswordError` if hashing fails.
pub async fn hash_credentials(credentials: NewUserCredentials) -> Result<NewUser, PasswordError> {
    let NewUserCredentials {
        username,
        password,
        role,
    } = credentials;
    let password_hash = hash_password_blocking(password).await?;

    Ok(NewUser {
        username,
        password_hash,
        role,
    })
}
