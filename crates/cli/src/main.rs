//! Retail Hub CLI - Schema setup and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create any missing tables in DATABASE_PATH
//! rh-cli migrate
//!
//! # Create a POS user (password read from RH_USER_PASSWORD)
//! RH_USER_PASSWORD='...' rh-cli user create -u manager -r manager
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run the idempotent schema setup
//! - `user create` - Create point-of-sale users

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use retail_hub_api::config::DatabaseConfig;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "rh-cli")]
#[command(author, version, about = "Retail Hub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing tables
    Migrate,
    /// Manage point-of-sale users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        /// Login name (3-64 characters, no whitespace)
        #[arg(short, long)]
        username: String,

        /// Free-form role, e.g. `manager` or `server`
        #[arg(short, long, default_value = "server")]
        role: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let database = DatabaseConfig::from_env()?;

    match cli.command {
        Commands::Migrate => commands::migrate::run(&database).await?,
        Commands::User { action } => match action {
            UserAction::Create { username, role } => {
                let password = commands::user::password_from_env()?;
                commands::user::create(&database, username, role, password).await?;
            }
        },
    }
    Ok(())
}
