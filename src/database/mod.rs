// ABOUTME: Database connection management and schema migrations for content collections
// ABOUTME: Owns the SQLite pool and hands out per-collection repository managers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! One `SQLite` table per collection, created from the collection's schema.
//! In-memory databases get a single, never-recycled connection so every
//! query sees the same store.

/// Ordered collection repository
pub mod collections;

/// Default content seeding
pub mod seed;

pub use collections::CollectionManager;
pub use seed::SeedReport;

use crate::constants::defaults;
use crate::errors::AppResult;
use anyhow::{anyhow, Result};
use basecamp_core::models::CollectionKind;
use basecamp_core::schema::CollectionSchema;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info};

/// Database manager for content collections
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the connection fails, or a
    /// migration fails
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| anyhow!("Invalid database URL '{database_url}': {e}"))?
            .create_if_missing(true)
            .foreign_keys(true);

        let is_memory = database_url.contains(":memory:");
        if !is_memory {
            if let Some(parent) = options.get_filename().parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
        }

        let pool_options = if is_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(defaults::DATABASE_MAX_CONNECTIONS)
        };
        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Wrap an existing pool and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Repository over every collection table
    #[must_use]
    pub fn collections(&self) -> CollectionManager {
        CollectionManager::new(self.pool.clone())
    }

    /// Create one table (and its ordering index) per collection
    ///
    /// # Errors
    ///
    /// Returns an error if a DDL statement fails
    pub async fn migrate(&self) -> Result<()> {
        for kind in CollectionKind::ALL {
            let schema = CollectionSchema::for_kind(kind);
            sqlx::query(&schema.create_table_sql())
                .execute(&self.pool)
                .await?;
            sqlx::query(&schema.create_order_index_sql())
                .execute(&self.pool)
                .await?;
            debug!(collection = %kind, table = schema.table, "Collection table ready");
        }
        info!(
            collections = CollectionKind::ALL.len(),
            "Database migrations complete"
        );
        Ok(())
    }

    /// Round-trip a trivial query, used by readiness checks
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be reached
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
