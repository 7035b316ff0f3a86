//! DataScout CLI - Database seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create and fill the store database (8 tables, 70 rows each)
//! ds-cli seed store
//!
//! # Same, with an explicit file and row count
//! ds-cli seed store --database my_database.db --rows 70
//!
//! # Reproducible data for demos
//! ds-cli seed store --seed 42
//!
//! # Create and fill the small demo database the agent queries
//! ds-cli seed demo
//!
//! # Show per-table row counts
//! ds-cli stats --database my_database.db
//! ```
//!
//! # Commands
//!
//! - `seed store` - Seed the store database with generated sample data
//! - `seed demo` - Seed the demo database with its fixed rows
//! - `stats` - Show per-table row counts for a database file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ds-cli")]
#[command(author, version, about = "DataScout CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a database with sample data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
    /// Show per-table row counts
    Stats {
        /// Database file to inspect
        #[arg(short, long, default_value = "my_database.db")]
        database: String,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Seed the store database with generated rows
    Store {
        /// Database file to create or fill
        #[arg(short, long, default_value = "my_database.db")]
        database: String,

        /// Rows to generate per table
        #[arg(short, long, default_value_t = datascout_seeder::generate::DEFAULT_ROWS)]
        rows: u32,

        /// RNG seed for reproducible data
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Seed the demo database with its fixed rows
    Demo {
        /// Database file to create or fill
        #[arg(short, long, default_value = "company_db.db")]
        database: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { target } => match target {
            SeedTarget::Store {
                database,
                rows,
                seed,
            } => commands::seed::store(&database, rows, seed).await?,
            SeedTarget::Demo { database } => commands::seed::demo(&database).await?,
        },
        Commands::Stats { database } => commands::stats::show(&database).await?,
    }
    Ok(())
}
