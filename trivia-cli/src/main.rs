//! trivia - command-line entry point for the trivia backend
//!
//! Subcommands:
//! - `serve`: run the HTTP API server
//! - `migrate`: apply schema migrations and exit
//! - `seed`: insert the canonical seed categories

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use trivia_server::{db, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "trivia",
    author,
    version,
    about = "Trivia question bank API server"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Apply schema migrations and exit
    Migrate(DbArgs),
    /// Insert the canonical seed categories
    Seed(DbArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Postgres connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

#[derive(Args, Debug)]
struct DbArgs {
    /// Postgres connection string (falls back to DATABASE_URL)
    #[arg(long)]
    database_url: Option<String>,
}

/// Resolve the connection string from the flag or the environment.
fn resolve_database_url(flag: Option<String>) -> Result<String> {
    flag.map(Ok).unwrap_or_else(|| {
        std::env::var("DATABASE_URL")
            .map_err(|_| anyhow!("DATABASE_URL is not set and --database-url was not given"))
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => {
            let config = ServerConfig {
                host: args.host,
                port: args.port,
                database_url: resolve_database_url(args.database_url)?,
            };
            trivia_server::serve(config).await?;
        }
        Commands::Migrate(args) => {
            let pool = db::create_pool(&resolve_database_url(args.database_url)?).await?;
            db::migrations::run(&pool).await?;
        }
        Commands::Seed(args) => {
            let pool = db::create_pool(&resolve_database_url(args.database_url)?).await?;
            db::migrations::run(&pool).await?;
            db::migrations::seed_categories(&pool).await?;
            tracing::info!("Seed categories inserted");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        let url = resolve_database_url(Some("postgres://flag/db".into())).unwrap();
        assert_eq!(url, "postgres://flag/db");
    }
}
