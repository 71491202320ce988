// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_vars};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns an error for URL schemes other than `sqlite:`
    pub fn parse_url(s: &str) -> Result<Self> {
        if let Some(path_str) = s.strip_prefix("sqlite:") {
            let path_str = path_str.trim_start_matches("//");
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else if path_str.is_empty() {
                Err(anyhow!("Database URL '{s}' has no file path"))
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        } else if s.contains("://") {
            Err(anyhow!("Unsupported database URL '{s}': only sqlite is supported"))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/basecamp.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// HTTP listener and middleware settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Request body limit in bytes
    pub max_body_bytes: usize,
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

/// Database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database location
    pub url: DatabaseUrl,
    /// Seed empty collections with default content at startup
    pub seed_on_startup: bool,
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Deployment environment
    pub environment: Environment,
    /// HTTP settings
    pub http: HttpConfig,
    /// Database settings
    pub database: DatabaseConfig,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            http: HttpConfig {
                host: defaults::HTTP_HOST.to_owned(),
                port: defaults::HTTP_PORT,
                request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
                max_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
            },
            database: DatabaseConfig {
                url: DatabaseUrl::default(),
                seed_on_startup: false,
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            http: HttpConfig {
                host: env_var_or(env_vars::HTTP_HOST, defaults::HTTP_HOST),
                port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
                request_timeout: Duration::from_secs(parse_env(
                    env_vars::REQUEST_TIMEOUT_SECS,
                    defaults::REQUEST_TIMEOUT_SECS,
                )?),
                max_body_bytes: parse_env(
                    env_vars::MAX_REQUEST_BODY_BYTES,
                    defaults::MAX_REQUEST_BODY_BYTES,
                )?,
            },
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_vars::DATABASE_URL,
                    defaults::DATABASE_URL,
                ))?,
                seed_on_startup: parse_bool_env(env_vars::SEED_ON_STARTUP, false)?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.http.request_timeout.is_zero() {
            return Err(anyhow!("{} must be greater than zero", env_vars::REQUEST_TIMEOUT_SECS));
        }
        if self.http.max_body_bytes == 0 {
            return Err(anyhow!(
                "{} must be greater than zero",
                env_vars::MAX_REQUEST_BODY_BYTES
            ));
        }
        if self.environment.is_production() && self.database.url.is_memory() {
            return Err(anyhow!("An in-memory database cannot be used in production"));
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http.host, self.http.port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Basecamp Server Configuration:\n\
             - Environment: {}\n\
             - HTTP: {}\n\
             - Database: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Body Limit: {} bytes\n\
             - Seed On Startup: {}",
            self.environment,
            self.bind_address(),
            self.database.url,
            self.cors.allowed_origins,
            self.http.request_timeout.as_secs(),
            self.http.max_body_bytes,
            self.database.seed_on_startup,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}")),
        Err(_) => Ok(default),
    }
}

/// Parse a boolean flag: `true`/`false`, `1`/`0`, `yes`/`no`, `on`/`off`
fn parse_bool_env(key: &str, default: bool) -> Result<bool> {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(anyhow!(
                "Invalid {key} value '{raw}': expected true/false, 1/0, yes/no or on/off"
            )),
        },
        Err(_) => Ok(default),
    }
}

/// Parse a comma-separated origin list
#[must_use]
pub fn parse_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(parse_origins("*"), vec!["*"]);
        assert_eq!(
            parse_origins("http://localhost:3000, https://shop.example.com ,"),
            vec!["http://localhost:3000", "https://shop.example.com"]
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything"),
            Environment::Development
        );
    }

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/site.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/site.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("content.db")
                .unwrap()
                .to_connection_string(),
            "sqlite:content.db"
        );
        assert!(DatabaseUrl::parse_url("postgres://localhost/site").is_err());
    }

    #[test]
    fn test_memory_database_rejected_in_production() {
        let mut config = ServerConfig::default();
        config.environment = Environment::Production;
        config.database.url = DatabaseUrl::Memory;
        assert!(config.validate().is_err());
    }
}
