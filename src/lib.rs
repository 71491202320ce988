// ABOUTME: Main library entry point for the Basecamp content server
// ABOUTME: Ordered storefront content collections exposed through admin and public REST APIs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Basecamp Content Server
//!
//! Backend for the admin-managed content of an outdoor-adventure storefront:
//! favorite destinations, travelers' choice entries, tips, hero sliders and
//! header menu entries. Each collection is an ordered list whose display
//! position is a persisted integer changed only by swapping adjacent items.
//!
//! ## Architecture
//!
//! - **Database**: one `SQLite` table per collection, one generic
//!   [`database::CollectionManager`] driven by the collection schema
//! - **Routes**: admin mutations under `/api/admin`, public reads under `/api`
//! - **Server**: middleware stack, health checks, graceful shutdown
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use basecamp_server::config::environment::ServerConfig;
//! use basecamp_server::database::Database;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database.url.to_connection_string()).await?;
//!
//!     let sliders = database
//!         .collections()
//!         .list_active("sliders".parse()?)
//!         .await?;
//!     println!("{} active sliders", sliders.len());
//!
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Environment variable names, defaults, and header names
pub mod constants;

/// Connection pool, migrations, and the collection repository
pub mod database;

/// Error types shared with `basecamp-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Shared server resources handed to route handlers
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and the HTTP server loop
pub mod server;
