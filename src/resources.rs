// ABOUTME: Centralized resource container shared by every route handler
// ABOUTME: Holds the database and the loaded server configuration behind Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use crate::database::{CollectionManager, Database};
use std::sync::Arc;

/// Shared server resources, created once at startup
#[derive(Clone)]
pub struct ServerResources {
    /// Database handle
    pub database: Arc<Database>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle the database and configuration
    #[must_use]
    pub fn new(database: Database, config: Arc<ServerConfig>) -> Self {
        Self {
            database: Arc::new(database),
            config,
        }
    }

    /// Collection repository over the shared pool
    #[must_use]
    pub fn collections(&self) -> CollectionManager {
        self.database.collections()
    }
}
