// ABOUTME: Default content seeding utility for the Basecamp content server
// ABOUTME: Fills empty collections with the embedded storefront content
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Default content seeder.
//!
//! Collections that already hold items are left untouched, so running the
//! seeder twice is harmless.
//!
//! Usage:
//! ```bash
//! # Seed the database named by DATABASE_URL
//! cargo run --bin seed-content
//!
//! # Override database URL
//! cargo run --bin seed-content -- --database-url sqlite:./data/basecamp.db
//!
//! # Verbose output
//! cargo run --bin seed-content -- -v
//! ```

use anyhow::{anyhow, Result};
use basecamp_server::{
    config::environment::DatabaseUrl,
    constants::{defaults, env_vars},
    database::Database,
};
use clap::Parser;
use std::env;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "seed-content",
    about = "Basecamp default content seeder",
    long_about = "Create the default destinations, tips, sliders and menu entries in empty collections"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    info!("=== Basecamp Default Content Seeder ===");

    let database_url = args
        .database_url
        .or_else(|| env::var(env_vars::DATABASE_URL).ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());
    let database_url = DatabaseUrl::parse_url(&database_url)?;
    if database_url.is_memory() {
        return Err(anyhow!("Seeding an in-memory database has no lasting effect"));
    }

    info!("Connecting to database: {database_url}");
    let database = Database::new(&database_url.to_connection_string()).await?;

    let report = database
        .seed_defaults()
        .await
        .map_err(|e| anyhow!("Seeding failed: {e}"))?;

    for (collection, count) in &report.seeded {
        info!("  ✓ {collection}: {count} items");
    }
    for collection in &report.skipped {
        info!("  - {collection}: already has content");
    }

    info!("");
    info!("=== Seeding Complete ===");
    info!("Created {} items", report.created());

    Ok(())
}
