//! Errors raised while assembling the gateway core.
//!
//! Signature mismatches are not errors: a bad hash from the outside world
//! is an expected case and is reported through `VerificationResult`.

use thiserror::Error;

/// Errors that can occur while building credentials or signing components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VnpayError {
    /// A required credential value was empty.
    #[error("Missing gateway credential: {0}")]
    MissingCredential(&'static str),

    /// A configured URL is not an absolute http(s) URL.
    #[error("Invalid gateway URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    /// The HMAC could not be keyed with the configured secret.
    #[error("Invalid signing key")]
    InvalidSigningKey,
}
