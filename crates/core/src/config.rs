//! Configuration loader module for Aniverse services
//!
//! Provides a unified configuration loading system with environment
//! variable parsing, validation, and .env file support. All configuration
//! uses the `ANIVERSE_` prefix for environment variables.
//!
//! Override hierarchy: defaults < .env < environment.
//!
//! # Example
//!
//! ```no_run
//! use aniverse_core::config::{load_dotenv, ConfigLoader, ServiceConfig, StoreConfig};
//!
//! # fn example() -> Result<(), aniverse_core::AniverseError> {
//! load_dotenv();
//!
//! let service_config = ServiceConfig::from_env()?;
//! let store_config = StoreConfig::from_env()?;
//!
//! service_config.validate()?;
//! store_config.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::AniverseError;
use crate::observability::LogFormat;
use std::str::FromStr;

/// Load a .env file if one is present
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Configuration loader trait
///
/// Provides standardized methods for loading and validating configuration
/// from environment variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables
    ///
    /// Reads environment variables with the `ANIVERSE_` prefix and
    /// constructs a configuration instance with defaults for missing
    /// optional values.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if an environment variable value
    /// cannot be parsed.
    fn from_env() -> Result<Self, AniverseError>;

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if any validation check fails.
    fn validate(&self) -> Result<(), AniverseError>;
}

/// HTTP service configuration
///
/// # Environment Variables
///
/// - `ANIVERSE_HOST` (optional): bind address (default: 127.0.0.1)
/// - `ANIVERSE_PORT` (optional): bind port (default: 8080)
/// - `ANIVERSE_LOG_FORMAT` (optional): "pretty" or "json" (default: pretty)
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ConfigLoader for ServiceConfig {
    fn from_env() -> Result<Self, AniverseError> {
        let defaults = ServiceConfig::default();

        let host = std::env::var("ANIVERSE_HOST").unwrap_or(defaults.host);
        let port = parse_env_var("ANIVERSE_PORT", defaults.port)?;

        let log_format = match std::env::var("ANIVERSE_LOG_FORMAT") {
            Ok(raw) => LogFormat::from_str(&raw).map_err(|_| {
                AniverseError::configuration(
                    format!("Unknown log format '{raw}' (expected 'pretty' or 'json')"),
                    Some("ANIVERSE_LOG_FORMAT"),
                )
            })?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    fn validate(&self) -> Result<(), AniverseError> {
        if self.host.is_empty() {
            return Err(AniverseError::configuration(
                "Bind address must not be empty",
                Some("ANIVERSE_HOST"),
            ));
        }
        if self.port == 0 {
            return Err(AniverseError::configuration(
                "Bind port must be non-zero",
                Some("ANIVERSE_PORT"),
            ));
        }
        // The host must form a valid authority when combined with the port.
        let probe = format!("http://{}:{}", self.host, self.port);
        url::Url::parse(&probe).map_err(|e| {
            AniverseError::configuration(
                format!("Invalid bind address '{}': {e}", self.host),
                Some("ANIVERSE_HOST"),
            )
        })?;
        Ok(())
    }
}

/// Snapshot store configuration
///
/// # Environment Variables
///
/// - `ANIVERSE_STORE_PATH` (optional): snapshot file path (default: data/db.json)
/// - `ANIVERSE_ADMIN_PASSWORD` (optional): credential seeded for the
///   reserved admin account when the store is first created (default: admin)
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the JSON snapshot file
    pub path: String,
    /// Credential for the bootstrap admin account
    pub admin_password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "data/db.json".to_string(),
            admin_password: "admin".to_string(),
        }
    }
}

impl ConfigLoader for StoreConfig {
    fn from_env() -> Result<Self, AniverseError> {
        let defaults = StoreConfig::default();

        Ok(Self {
            path: std::env::var("ANIVERSE_STORE_PATH").unwrap_or(defaults.path),
            admin_password: std::env::var("ANIVERSE_ADMIN_PASSWORD")
                .unwrap_or(defaults.admin_password),
        })
    }

    fn validate(&self) -> Result<(), AniverseError> {
        if self.path.is_empty() {
            return Err(AniverseError::configuration(
                "Store path must not be empty",
                Some("ANIVERSE_STORE_PATH"),
            ));
        }
        if self.admin_password.is_empty() {
            return Err(AniverseError::configuration(
                "Admin password must not be empty",
                Some("ANIVERSE_ADMIN_PASSWORD"),
            ));
        }
        Ok(())
    }
}

/// Parse an environment variable with a typed default
fn parse_env_var<T: FromStr>(key: &str, default: T) -> Result<T, AniverseError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse().map_err(|_| {
            AniverseError::configuration(format!("Cannot parse '{raw}' for {key}"), Some(key))
        }),
        Err(_) => Ok(default),
    }
}
