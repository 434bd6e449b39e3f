//! VNPAY gateway configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::vnpay::{GatewayCredentials, VnpayError};

/// Merchant credentials and gateway endpoints.
///
/// Every field except the query API is required; there is no sandbox
/// fallback. Empty values deserialize fine and are reported by
/// [`validate`](Self::validate) with the field name.
#[derive(Debug, Clone, Deserialize)]
pub struct VnpayConfig {
    /// Merchant terminal code (`vnp_TmnCode`)
    #[serde(default)]
    pub tmn_code: String,

    /// Shared HMAC secret
    #[serde(default = "empty_secret")]
    pub hash_secret: SecretString,

    /// Gateway payment page
    #[serde(default)]
    pub payment_url: String,

    /// Where the customer's browser lands after checkout
    #[serde(default)]
    pub return_url: String,

    /// Where the gateway sends the IPN
    #[serde(default)]
    pub ipn_url: String,

    /// Gateway `querydr` API; the query endpoint answers 503 without it
    pub query_url: Option<String>,

    /// Query API timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
}

impl VnpayConfig {
    /// Builds the immutable credentials shared by the gateway components.
    pub fn to_credentials(&self) -> Result<GatewayCredentials, VnpayError> {
        GatewayCredentials::new(
            self.tmn_code.trim(),
            &self.hash_secret,
            self.payment_url.trim(),
            self.return_url.trim(),
            self.ipn_url.trim(),
        )
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Query URL, treating an empty value as unset.
    pub fn query_url(&self) -> Option<&str> {
        self.query_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Validate gateway configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.to_credentials()?;

        if let Some(url) = self.query_url() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidQueryUrl);
            }
        }
        if self.query_timeout_secs == 0 || self.query_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Production-only requirements.
    pub fn validate_production(&self) -> Result<(), ValidationError> {
        if !self.payment_url.trim().starts_with("https://") {
            return Err(ValidationError::PaymentUrlMustBeHttps);
        }
        Ok(())
    }
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_query_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> VnpayConfig {
        VnpayConfig {
            tmn_code: "TESTTMN1".to_string(),
            hash_secret: SecretString::new("SECRETKEY".to_string()),
            payment_url: "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html".to_string(),
            return_url: "http://localhost:8000/vnpay/return".to_string(),
            ipn_url: "http://localhost:8000/vnpay/ipn".to_string(),
            query_url: None,
            query_timeout_secs: default_query_timeout(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
        assert!(config().to_credentials().is_ok());
    }

    #[test]
    fn test_missing_tmn_code() {
        let config = VnpayConfig {
            tmn_code: "  ".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGateway(VnpayError::MissingCredential("tmn_code")))
        ));
    }

    #[test]
    fn test_missing_secret() {
        let config = VnpayConfig {
            hash_secret: empty_secret(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGateway(VnpayError::MissingCredential("hash_secret")))
        ));
    }

    #[test]
    fn test_non_http_return_url() {
        let config = VnpayConfig {
            return_url: "ftp://example.com/return".to_string(),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidGateway(VnpayError::InvalidUrl { .. }))
        ));
    }

    #[test]
    fn test_empty_query_url_is_unset() {
        let config = VnpayConfig {
            query_url: Some("".to_string()),
            ..config()
        };
        assert_eq!(config.query_url(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_query_url() {
        let config = VnpayConfig {
            query_url: Some("sandbox.vnpayment.vn/merchant_webapi".to_string()),
            ..config()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidQueryUrl)
        ));
    }

    #[test]
    fn test_production_requires_https_payment_url() {
        assert!(config().validate_production().is_ok());

        let config = VnpayConfig {
            payment_url: "http://sandbox.vnpayment.vn/paymentv2/vpcpay.html".to_string(),
            ..config()
        };
        assert!(config.validate_production().is_err());
    }
}
