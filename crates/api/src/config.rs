//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `PORT` - Listen port (default: 3000)
//! - `HOST` - Bind address (default: 0.0.0.0)
//! - `DATABASE_PATH` - SQLite data file, created if missing (default: database.sqlite)
//! - `DATABASE_MAX_CONNECTIONS` - Connection pool size (default: 5)
//! - `CORS_ALLOWED_ORIGINS` - Comma-separated origins the front ends are served from
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate, 0.0-1.0 (default: 0.0)
//! - `LOG_FORMAT` - `text` or `json` (default: text)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DATABASE_PATH: &str = "database.sqlite";
const DEFAULT_MAX_CONNECTIONS: &str = "5";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Storage settings
    pub database: DatabaseConfig,
    /// Origins allowed to call the API from a browser (empty = same-origin only)
    pub cors_allowed_origins: Vec<String>,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

/// SQLite storage configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Path to the data file
    pub path: PathBuf,
    /// Maximum pooled connections
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Storage settings for a data file at `path` with the default pool size.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
        }
    }

    /// Load only the storage settings from the environment.
    ///
    /// Used by tooling that touches the data file without serving HTTP.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DATABASE_MAX_CONNECTIONS` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = PathBuf::from(get_or_default(lookup, "DATABASE_PATH", DEFAULT_DATABASE_PATH));
        let max_connections: u32 = parse_var(
            lookup,
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "DATABASE_MAX_CONNECTIONS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            path,
            max_connections,
        })
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(&env_lookup)
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host: IpAddr = parse_var(lookup, "HOST", DEFAULT_HOST)?;
        let port: u16 = parse_var(lookup, "PORT", DEFAULT_PORT)?;
        let database = DatabaseConfig::from_lookup(lookup)?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let sentry_sample_rate = parse_rate(lookup, "SENTRY_SAMPLE_RATE", "1.0")?;
        let sentry_traces_sample_rate = parse_rate(lookup, "SENTRY_TRACES_SAMPLE_RATE", "0.0")?;

        let log_json = match get_or_default(lookup, "LOG_FORMAT", "text").trim() {
            "text" => false,
            "json" => true,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "LOG_FORMAT".to_string(),
                    format!("expected text or json (got {other})"),
                ));
            }
        };

        Ok(Self {
            host,
            port,
            database,
            cors_allowed_origins,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
            log_json,
        })
    }

    /// Configuration for a loopback server on an ephemeral port.
    ///
    /// Sentry and CORS are disabled. Used by tests and local tooling.
    #[must_use]
    pub fn local(database: DatabaseConfig) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            database,
            cors_allowed_origins: Vec::new(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
            log_json: false,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

/// Parse a variable (or its default) into `T`.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_or_default(lookup, key, default)
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a sample rate, which must lie in `0.0..=1.0`.
fn parse_rate(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<f32, ConfigError> {
    let rate: f32 = parse_var(lookup, key, default)?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}
