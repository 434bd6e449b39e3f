//! HTTP listener settings
//!
//! Where the gateway endpoints listen, where they are mounted, and how the
//! request pipeline (timeout, CORS, logs) behaves.

use serde::Deserialize;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;
use crate::logging::LogFormat;

/// Upper bound for the per-request timeout. The IPN must be answered well
/// inside the gateway's own retry window.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// `host:port` to listen on, e.g. `0.0.0.0:8000`
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    #[serde(default)]
    pub environment: Environment,

    /// `tracing` filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default)]
    pub log_format: LogFormat,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins; any origin when unset
    #[serde(default)]
    pub allowed_origins: Option<String>,

    /// Mount point of the payment endpoints
    #[serde(default = "default_payment_route_prefix")]
    pub payment_route_prefix: String,
}

/// Deployment environment. Production tightens validation.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured CORS origins, blanks skipped.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bind_address.port() == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        // Nested under axum, so "/" and a trailing slash are both rejected.
        let prefix = self.payment_route_prefix.as_str();
        if !prefix.starts_with('/') || prefix.len() < 2 || prefix.ends_with('/') {
            return Err(ValidationError::InvalidRoutePrefix);
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            environment: Environment::default(),
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            request_timeout_secs: default_request_timeout(),
            allowed_origins: None,
            payment_route_prefix: default_payment_route_prefix(),
        }
    }
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8000))
}

fn default_log_filter() -> String {
    "info,vnpay_gateway=debug,sqlx=warn,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_payment_route_prefix() -> String {
    "/vnpay".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_listen_on_port_8000_under_vnpay() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:8000");
        assert_eq!(config.payment_route_prefix, "/vnpay");
        assert_eq!(config.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn deserializes_bind_address_from_string() {
        let config: ServerConfig = serde_json::from_value(serde_json::json!({
            "bind_address": "127.0.0.1:3000",
            "environment": "production",
            "log_format": "json"
        }))
        .unwrap();

        assert_eq!(config.bind_address.port(), 3000);
        assert!(config.is_production());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result: Result<ServerConfig, _> =
            serde_json::from_value(serde_json::json!({ "environment": "staging" }));

        assert!(result.is_err());
    }

    #[test]
    fn port_zero_is_rejected() {
        let config = ServerConfig {
            bind_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(ValidationError::InvalidPort)));
    }

    #[test]
    fn request_timeout_must_fit_ipn_window() {
        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }

        let config = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(120));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn allowed_origins_skip_blanks() {
        let config = ServerConfig {
            allowed_origins: Some("https://shop.vn, ,https://admin.shop.vn,".to_string()),
            ..Default::default()
        };

        assert_eq!(
            config.allowed_origins(),
            vec!["https://shop.vn", "https://admin.shop.vn"]
        );
        assert!(ServerConfig::default().allowed_origins().is_empty());
    }

    #[test]
    fn payment_route_prefix_must_be_nestable() {
        for prefix in ["vnpay", "/", "/vnpay/", ""] {
            let config = ServerConfig {
                payment_route_prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ValidationError::InvalidRoutePrefix)),
                "prefix {:?} should be rejected",
                prefix
            );
        }

        let config = ServerConfig {
            payment_route_prefix: "/api/payments/vnpay".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
