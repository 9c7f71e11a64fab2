//! CLI subcommands.

pub mod migrate;
pub mod user;

use thiserror::Error;

use retail_hub_api::config::ConfigError;
use retail_hub_api::db::RepositoryError;
use retail_hub_api::models::ValidationError;
use retail_hub_api::services::password::PasswordError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Environment variable set to an invalid value.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Data file could not be opened.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema setup failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Command arguments failed validation.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Password could not be hashed.
    #[error(transparent)]
    Password(#[from] PasswordError),

    /// Insert failed (e.g. username taken).
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
