// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, and item payload builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `basecamp_server`

use anyhow::Result;
use basecamp_core::models::{CollectionKind, ItemPayload, OrderedItem};
use basecamp_server::{
    config::environment::{DatabaseConfig, DatabaseUrl, Environment, ServerConfig},
    database::Database,
    resources::ServerResources,
};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new("sqlite::memory:").await
}

/// Configuration for tests: in-memory database, testing environment
pub fn test_config() -> ServerConfig {
    ServerConfig {
        environment: Environment::Testing,
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            seed_on_startup: false,
        },
        ..ServerConfig::default()
    }
}

/// Server resources over a fresh in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    create_test_server_resources_with(test_config()).await
}

/// Server resources over a fresh in-memory database with a custom config
pub async fn create_test_server_resources_with(
    config: ServerConfig,
) -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(database, Arc::new(config))))
}

/// Minimal valid payload for collections that require an image
pub fn titled(title: &str) -> ItemPayload {
    ItemPayload::titled(title, format!("https://cdn.example.com/{}.jpg", title.to_lowercase()))
}

/// Create items A, B, C (orders 0, 1, 2) in a collection
pub async fn create_abc(database: &Database, kind: CollectionKind) -> Result<Vec<OrderedItem>> {
    let manager = database.collections();
    let mut items = Vec::new();
    for title in ["A", "B", "C"] {
        items.push(manager.create(kind, &titled(title)).await?);
    }
    Ok(items)
}

/// Titles of a listing, in order
pub fn titles(items: &[OrderedItem]) -> Vec<String> {
    items.iter().map(|item| item.content.title.clone()).collect()
}
