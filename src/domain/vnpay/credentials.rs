//! Immutable merchant credentials shared by every gateway component.

use secrecy::SecretString;

use super::errors::VnpayError;
use super::signature::SignatureEngine;

/// Merchant code, shared secret and the gateway/merchant URLs.
///
/// Built once at startup and shared behind an `Arc`; never mutated.
/// The secret itself is consumed into the signing engine and cannot be
/// read back.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    tmn_code: String,
    payment_url: String,
    return_url: String,
    ipn_url: String,
    signer: SignatureEngine,
}

impl GatewayCredentials {
    /// Validates and assembles the credentials.
    ///
    /// # Errors
    ///
    /// - `MissingCredential` if any value is empty
    /// - `InvalidUrl` if a URL is not absolute http(s)
    pub fn new(
        tmn_code: impl Into<String>,
        hash_secret: &SecretString,
        payment_url: impl Into<String>,
        return_url: impl Into<String>,
        ipn_url: impl Into<String>,
    ) -> Result<Self, VnpayError> {
        let tmn_code = tmn_code.into();
        if tmn_code.trim().is_empty() {
            return Err(VnpayError::MissingCredential("tmn_code"));
        }

        let payment_url = require_url("payment_url", payment_url.into())?;
        let return_url = require_url("return_url", return_url.into())?;
        let ipn_url = require_url("ipn_url", ipn_url.into())?;
        let signer = SignatureEngine::new(hash_secret)?;

        Ok(Self {
            tmn_code,
            payment_url,
            return_url,
            ipn_url,
            signer,
        })
    }

    /// Merchant terminal code (`vnp_TmnCode`).
    pub fn tmn_code(&self) -> &str {
        &self.tmn_code
    }

    /// Gateway payment page the user is redirected to.
    pub fn payment_url(&self) -> &str {
        &self.payment_url
    }

    /// Merchant URL the gateway redirects the browser back to.
    pub fn return_url(&self) -> &str {
        &self.return_url
    }

    /// Merchant URL registered with the gateway for IPN delivery.
    pub fn ipn_url(&self) -> &str {
        &self.ipn_url
    }

    pub fn signer(&self) -> &SignatureEngine {
        &self.signer
    }
}

fn require_url(field: &'static str, value: String) -> Result<String, VnpayError> {
    if value.trim().is_empty() {
        return Err(VnpayError::MissingCredential(field));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(VnpayError::InvalidUrl { field, value });
    }
    Ok(value)
}
