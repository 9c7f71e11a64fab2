//! Schema setup command.
//!
//! # Usage
//!
//! ```bash
//! rh-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH` - SQLite data file, created if missing (default: database.sqlite)
//!
//! The server runs the same setup on startup. Running it against a file
//! that already has the tables leaves their data untouched.

use retail_hub_api::config::DatabaseConfig;
use retail_hub_api::db;

use super::CliError;

/// Create any missing tables in the configured data file.
///
/// # Errors
///
/// Returns `CliError` if the file cannot be opened or a statement fails.
pub async fn run(config: &DatabaseConfig) -> Result<(), CliError> {
    tracing::info!(path = %config.path.display(), "Opening database...");
    let pool = db::create_pool(config).await?;

    tracing::info!("Running schema setup...");
    let result = db::init_schema(&pool).await;
    pool.close().await;
    result?;

    tracing::info!("Schema setup complete!");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_creates_file_and_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::at(dir.path().join("pos.sqlite"));

        run(&config).await.unwrap();
        assert!(config.path.exists());

        run(&config).await.unwrap();
    }
}
