// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Environment variable names, defaults, service names, and HTTP header names

//! Constants module
//!
//! Constants are grouped by domain. Configuration defaults live here so the
//! config loader, the binaries, and the tests agree on them.

/// Environment variable names read by the configuration loader
pub mod env_vars {
    /// Bind address
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Request body limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Seed empty collections on startup
    pub const SEED_ON_STARTUP: &str = "SEED_ON_STARTUP";
}

/// Default configuration values
pub mod defaults {
    /// Bind address
    pub const HTTP_HOST: &str = "0.0.0.0";
    /// Bind port
    pub const HTTP_PORT: u16 = 8080;
    /// `SQLite` database file
    pub const DATABASE_URL: &str = "sqlite:./data/basecamp.db";
    /// CORS origins (any)
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Request body limit (1 MiB)
    pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;
    /// Connections in a file-backed pool
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
}

/// Service names for structured logging
pub mod service_names {
    /// This server
    pub const BASECAMP_SERVER: &str = "basecamp-server";
}

/// HTTP header names
pub mod headers {
    /// Request correlation id
    pub const REQUEST_ID: &str = "x-request-id";
    /// Collection whose cached listing a mutation invalidated
    pub const INVALIDATE_COLLECTION: &str = "x-invalidate-collection";
}

/// API path prefixes
pub mod paths {
    /// Public read API
    pub const PUBLIC_API: &str = "/api";
    /// Admin mutation API
    pub const ADMIN_API: &str = "/api/admin";
}
