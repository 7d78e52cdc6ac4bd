//! CLI administration tool for user-api.
//!
//! Inspects and maintains stored users without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- users list
//!
//! # Show one user
//! cargo run --bin admin -- users show 42
//!
//! # Delete a user (asks for confirmation unless --yes)
//! cargo run --bin admin -- users delete 42
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*` components).

use user_api::application::services::UserService;
use user_api::config::{Config, Storage, mask_connection_string};
use user_api::domain::entities::User;
use user_api::infrastructure::persistence::PgUserRepository;
use user_api::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-api.
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
    /// Inspect and maintain users
    Users {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Show a single user
    Show {
        /// User id
        id: i64,
    },

    /// Delete a user
    Delete {
        /// User id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type PgUserService = UserService<PgUserRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    if config.storage != Storage::Postgres {
        anyhow::bail!("Admin commands need PostgreSQL storage, got STORAGE={}", config.storage);
    }
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Users { action } => handle_user_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    Ok(())
}

/// Dispatches user commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));
    let service = UserService::new(repo);

    match action {
        UserAction::List => list_users(&service).await?,
        UserAction::Show { id } => show_user(&service, id).await?,
        UserAction::Delete { id, yes } => delete_user(&service, id, yes).await?,
    }

    Ok(())
}

/// Lists all users as a table.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   ID    Name                           Age   Email
///   ───────────────────────────────────────────────────────────────────────────
///   1     Jane Doe                       30    jane@doe.com
/// ```
async fn list_users(service: &PgUserService) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = service
        .get_all_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<5} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Age".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<30} {:<5} {}",
            user.id.to_string().bright_black(),
            full_name(user).cyan(),
            user.age,
            user.email
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints a single user. The password is never shown.
async fn show_user(service: &PgUserService, id: i64) -> Result<()> {
    let user = service
        .get_user_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("{}", "👤 User".bright_blue().bold());
    println!();
    println!("  ID:    {}", user.id.to_string().bright_black());
    println!("  Name:  {}", full_name(&user).cyan());
    println!("  Age:   {}", user.age);
    println!("  Email: {}", user.email);
    println!();

    Ok(())
}

/// Deletes a user after confirmation.
async fn delete_user(service: &PgUserService, id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete User".bright_blue().bold());
    println!();

    let Some(user) = service
        .get_user_by_id(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    else {
        println!("{}", "⚠️  No user with this id, nothing to delete".yellow());
        return Ok(());
    };

    println!("  User: {}", full_name(&user).cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_user(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔌 Database Check".bright_blue().bold());
            println!();
            println!("  Target: {}", mask_connection_string(&config.database_url));

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await
                .context("Failed to query users table")?;

            println!("  {}", "Connection OK".green().bold());
            println!("  Users: {}", count.to_string().bright_white().bold());
            println!();
        }
    }

    Ok(())
}

fn full_name(user: &User) -> String {
    format!("{} {}", user.first_name, user.last_name)
}
