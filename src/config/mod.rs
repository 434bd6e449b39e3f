//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `VNPAY_GATEWAY`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use vnpay_gateway::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Payment endpoints under {}", config.server.payment_route_prefix);
//! ```

mod database;
mod error;
mod server;
mod vnpay;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use vnpay::VnpayConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listener, environment, routing and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL); orders stay in memory without it
    pub database: Option<DatabaseConfig>,

    /// Gateway credentials and endpoints
    pub vnpay: VnpayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VNPAY_GATEWAY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `VNPAY_GATEWAY__SERVER__BIND_ADDRESS=0.0.0.0:8000` -> `server.bind_address`
    /// - `VNPAY_GATEWAY__VNPAY__TMN_CODE=...` -> `vnpay.tmn_code = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// Missing gateway values are reported by [`validate`](Self::validate).
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("VNPAY_GATEWAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// - Server address, timeout and route prefix
    /// - Gateway credentials present and URLs well-formed
    /// - Database URL and pool limits, when configured
    /// - Production: database required, payment URL over HTTPS
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.vnpay.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }

        if self.is_production() {
            if self.database.is_none() {
                return Err(ValidationError::DatabaseRequiredInProduction);
            }
            self.vnpay.validate_production()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
