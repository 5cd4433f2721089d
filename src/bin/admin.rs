//! CLI administration tool for url-redirector.
//!
//! Provides commands for managing accounts, inspecting short-name entries,
//! and checking the database without going through the web UI.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (password is prompted)
//! cargo run --bin admin -- user create --email a@x.com
//!
//! # List accounts
//! cargo run --bin admin -- user list
//!
//! # List entries, optionally for one owner
//! cargo run --bin admin -- entry list --owner a@x.com
//!
//! # Show where a short name points
//! cargo run --bin admin -- entry resolve blog
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Reads the same database settings as the server (`DATABASE_URL` or `DB_*`).
//! `STORAGE_BACKEND=memory` is rejected since there is nothing to administer.

use url_redirector::application::services::{AccountService, OwnershipMode, RegistryService};
use url_redirector::config::{self, StorageBackend};
use url_redirector::domain::entities::PrincipalView;
use url_redirector::domain::repositories::UserRepository;
use url_redirector::infrastructure::persistence::{PgUserRepository, PgWebsiteRepository};
use url_redirector::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-redirector.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Inspect short-name entries
    Entry {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Account subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        /// Account email (prompted if omitted)
        #[arg(short, long)]
        email: Option<String>,
    },

    /// List all accounts
    List,
}

/// Entry subcommands.
#[derive(Subcommand)]
enum EntryAction {
    /// List entries
    List {
        /// Only entries owned by this email
        #[arg(short, long)]
        owner: Option<String>,
    },

    /// Show the destination of a short name
    Resolve {
        /// Short name, matched exactly
        name: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend == StorageBackend::Memory {
        anyhow::bail!("The admin tool needs STORAGE_BACKEND=postgres");
    }

    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Entry { action } => handle_entry_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches account commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let service = AccountService::new(Arc::new(PgUserRepository::new(Arc::new(pool.clone()))));

    match action {
        UserAction::Create { email } => {
            println!("{}", "👤 Create Account".bright_blue().bold());
            println!();

            let email = match email {
                Some(e) => e,
                None => Input::new().with_prompt("Email").interact_text()?,
            };

            let password = Password::new()
                .with_prompt("Password")
                .with_confirmation("Repeat password", "Passwords do not match")
                .interact()?;

            let user = service
                .create_user(&email, &password)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create account: {}", e))?;

            println!();
            println!(
                "{} {} (id {})",
                "✅ Created".green().bold(),
                user.email.cyan(),
                user.id.to_string().bright_black()
            );
        }
        UserAction::List => {
            println!("{}", "📋 Accounts".bright_blue().bold());
            println!();

            let users = service
                .list_users()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list accounts: {}", e))?;

            if users.is_empty() {
                println!("{}", "  No accounts found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<40} {:<20}",
                "ID".bright_white().bold(),
                "Email".bright_white().bold(),
                "Created".bright_white().bold()
            );
            println!("  {}", "─".repeat(68).bright_black());

            for user in &users {
                println!(
                    "  {:<6} {:<40} {}",
                    user.id.to_string().bright_black(),
                    user.email.cyan(),
                    user.created_at
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }

            println!();
            println!("  Total: {}", users.len().to_string().bright_white().bold());
        }
    }

    Ok(())
}

/// Dispatches entry commands.
///
/// `--owner` always filters by owner, whatever `OWNERSHIP_MODE` says.
async fn handle_entry_action(action: EntryAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let registry = RegistryService::new(
        Arc::new(PgWebsiteRepository::new(pool.clone())),
        OwnershipMode::Scoped,
    );

    match action {
        EntryAction::List { owner } => {
            println!("{}", "📋 Entries".bright_blue().bold());
            println!();

            let entries = match owner {
                Some(email) => {
                    let user = PgUserRepository::new(pool)
                        .find_by_email(&email)
                        .await
                        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                        .with_context(|| format!("No account with email {email}"))?;

                    registry
                        .list_for_owner(&PrincipalView::from(&user))
                        .await
                        .map_err(|e| anyhow::anyhow!("Failed to list entries: {}", e))?
                }
                None => registry
                    .list_all()
                    .await
                    .map_err(|e| anyhow::anyhow!("Failed to list entries: {}", e))?,
            };

            if entries.is_empty() {
                println!("{}", "  No entries found".yellow());
                return Ok(());
            }

            println!(
                "  {:<6} {:<24} {:<8} {}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Owner".bright_white().bold(),
                "Destination".bright_white().bold()
            );
            println!("  {}", "─".repeat(75).bright_black());

            for entry in &entries {
                let owner = entry
                    .owner_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "  {:<6} {:<24} {:<8} {}",
                    entry.id.to_string().bright_black(),
                    entry.name.cyan(),
                    owner.bright_black(),
                    entry.destination
                );
            }

            println!();
            println!("  Total: {}", entries.len().to_string().bright_white().bold());
        }
        EntryAction::Resolve { name } => {
            let destination = registry
                .resolve(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            match destination {
                Some(d) => println!("  /{} → {}", name.cyan(), d.bright_green()),
                None => println!("{}", format!("  /{name} is not registered").yellow()),
            }
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_users")
                .fetch_one(pool)
                .await?;
            let entries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_websites")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Accounts:   {}", users.to_string().bright_green().bold());
            println!("  Entries:    {}", entries.to_string().bright_green().bold());
            println!();
        }
    }

    Ok(())
}
