//! CLI administration tool for url-shortener.
//!
//! Works against the same store as the server, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show the record behind a short id
//! cargo run --bin admin -- lookup V1StGXR
//!
//! # Shorten a URL (same validation as POST /new)
//! cargo run --bin admin -- shorten https://example.com/page
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see `url_shortener::config`.

use url_shortener::application::services::UrlService;
use url_shortener::config::{self, Config};
use url_shortener::error::AppError;
use url_shortener::server::{build_url_service, connect_repository};
use url_shortener::utils::url_normalizer::normalize_url;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing url-shortener.
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
    /// Show the URL behind a short id
    Lookup {
        /// Short id, exactly as it appears in the link
        short_id: String,
    },

    /// Shorten a URL
    Shorten {
        /// Absolute http(s) URL
        url: String,

        /// Skip the hostname lookup
        #[arg(long)]
        skip_dns: bool,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        command => {
            let repository = connect_repository(&config).await?;
            let service = build_url_service(&config, repository);

            match command {
                Commands::Lookup { short_id } => lookup(&service, &short_id).await?,
                Commands::Shorten { url, skip_dns } => shorten(&service, &url, skip_dns).await?,
                Commands::Stats => handle_stats(&service).await?,
                Commands::Db { .. } => unreachable!("handled above"),
            }
        }
    }

    Ok(())
}

/// Prints the record for a short id.
async fn lookup(service: &UrlService, short_id: &str) -> Result<()> {
    match service.resolve(short_id).await {
        Ok(record) => {
            println!("{}", "🔗 Short link".bright_blue().bold());
            println!();
            println!("  Short id: {}", record.short_id.bright_yellow().bold());
            println!("  URL:      {}", record.original_url.cyan());
            println!(
                "  Created:  {}",
                record
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            println!();
        }
        Err(AppError::NotFound { .. }) => {
            println!("{} {}", "❌ No link found for".red(), short_id.bright_white());
        }
        Err(e) => return Err(anyhow::anyhow!("Lookup failed: {:?}", e)),
    }

    Ok(())
}

/// Runs acceptance checks and allocation for a URL.
///
/// With `--skip-dns` the URL is still parsed and normalized, but the hostname is not
/// looked up.
async fn shorten(service: &UrlService, url: &str, skip_dns: bool) -> Result<()> {
    let result = if skip_dns {
        let normalized = normalize_url(url).context("Invalid URL")?;
        service.allocate(normalized.as_str()).await
    } else {
        service.shorten(url).await
    };

    match result {
        Ok(record) => {
            println!("{}", "✅ Short link ready".green().bold());
            println!();
            println!("  Short id: {}", record.short_id.bright_yellow().bold());
            println!("  URL:      {}", record.original_url.cyan());
            println!();
        }
        Err(e @ (AppError::InvalidInput { .. } | AppError::HostUnresolvable { .. })) => {
            println!("{} {}", "❌".red(), format!("{:?}", e).red());
        }
        Err(e) => return Err(anyhow::anyhow!("Shortening failed: {:?}", e)),
    }

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(service: &UrlService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("  Links: {}", links_count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config) -> Result<()> {
    if config.is_in_memory() {
        println!("{}", "ℹ️  In-memory storage configured, no database".yellow());
        return Ok(());
    }

    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(&pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(&pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
