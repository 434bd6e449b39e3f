//! Configuration error types

use thiserror::Error;

use crate::domain::vnpay::VnpayError;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Listen port must not be 0")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Payment route prefix must start with '/' and must not be '/' or end with '/'")]
    InvalidRoutePrefix,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool size must be between 1 and {0}")]
    InvalidPoolSize(u32),

    #[error("Database configuration is required in production")]
    DatabaseRequiredInProduction,

    #[error("Invalid gateway configuration: {0}")]
    InvalidGateway(#[from] VnpayError),

    #[error("Invalid gateway query URL")]
    InvalidQueryUrl,

    #[error("Gateway payment URL must use HTTPS in production")]
    PaymentUrlMustBeHttps,
}
