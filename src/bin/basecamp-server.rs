// ABOUTME: Server binary for the Basecamp content API
// ABOUTME: Loads configuration from the environment, applies CLI overrides, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Basecamp Server Binary
//!
//! ```bash
//! # Defaults from the environment
//! cargo run --bin basecamp-server
//!
//! # Local run against a scratch database, seeded with default content
//! cargo run --bin basecamp-server -- --http-port 3000 --database-url sqlite:./data/dev.db --seed
//! ```

use anyhow::Result;
use basecamp_server::{
    config::environment::{DatabaseUrl, ServerConfig},
    logging, server,
};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "basecamp-server")]
#[command(about = "Basecamp content server - ordered storefront content over a JSON API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,

    /// Seed empty collections with default content before serving
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http.port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }
    if args.seed {
        config.database.seed_on_startup = true;
    }
    config.validate()?;

    info!("Starting Basecamp content server");
    if let Err(e) = server::run(config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
