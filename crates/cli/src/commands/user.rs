//! Point-of-sale user management commands.
//!
//! # Usage
//!
//! ```bash
//! RH_USER_PASSWORD='correct horse' rh-cli user create -u manager -r manager
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_PATH` - SQLite data file (default: database.sqlite)
//! - `RH_USER_PASSWORD` - Password for the new user (kept off the command line)

use secrecy::{ExposeSecret, SecretString};

use retail_hub_api::config::DatabaseConfig;
use retail_hub_api::db::{self, UserRepository};
use retail_hub_api::models::CreateUserRequest;
use retail_hub_api::services::password::hash_credentials;
use retail_hub_core::UserId;

use super::CliError;

/// Environment variable holding the new user's password.
pub const PASSWORD_ENV_VAR: &str = "RH_USER_PASSWORD";

/// Read the new user's password from the environment.
///
/// # Errors
///
/// Returns `CliError::MissingEnvVar` if the variable is unset or empty.
pub fn password_from_env() -> Result<SecretString, CliError> {
    std::env::var(PASSWORD_ENV_VAR)
        .ok()
        .filter(|p| !p.is_empty())
        .map(SecretString::from)
        .ok_or(CliError::MissingEnvVar(PASSWORD_ENV_VAR))
}

/// Create a user with the same rules as `POST /api/users`.
///
/// # Errors
///
/// Returns `CliError` if validation fails, the username is taken,
/// or the data file cannot be written.
pub async fn create(
    config: &DatabaseConfig,
    username: String,
    role: String,
    password: SecretString,
) -> Result<UserId, CliError> {
    let credentials = CreateUserRequest {
        username: Some(username),
        password: Some(password.expose_secret().to_owned()),
        role: Some(role),
    }
    .validate()?;
    let user = hash_credentials(credentials).await?;

    let pool = db::create_pool(config).await?;
    db::init_schema(&pool).await?;
    let result = UserRepository::new(&pool).create(&user).await;
    pool.close().await;
    let user_id = result?;

    tracing::info!(%user_id, username = %user.username, role = %user.role, "User created");
    Ok(user_id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use retail_hub_api::db::RepositoryError;
    use retail_hub_api::models::ValidationError;

    use super::*;

    fn temp_config() -> (tempfile::TempDir, DatabaseConfig) {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::at(dir.path().join("pos.sqlite"));
        (dir, config)
    }

    #[tokio::test]
    async fn test_create_user() {
        let (_dir, config) = temp_config();

        let id = create(
            &config,
            "manager".to_string(),
            "manager".to_string(),
            SecretString::from("correct horse"),
        )
        .await
        .unwrap();
        assert_eq!(id, UserId::new(1));

        let err = create(
            &config,
            "manager".to_string(),
            "server".to_string(),
            SecretString::from("another password"),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            CliError::Repository(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_weak_password_rejected_before_opening_database() {
        let (_dir, config) = temp_config();

        let err = create(
            &config,
            "manager".to_string(),
            "manager".to_string(),
            SecretString::from("short"),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::Validation(ValidationError::WeakPassword(8))
        ));
        assert!(!config.path.exists());
    }
}
