//! VNPAY signing and verification core.
//!
//! Everything here is pure and synchronous: canonicalization, HMAC-SHA512
//! signing, payment URL and query payload construction, callback
//! verification, and the gateway's static catalogs. Components share one
//! immutable [`GatewayCredentials`] behind an `Arc`.

mod amount;
mod banks;
mod callback;
mod credentials;
mod errors;
pub mod fields;
mod ipn;
mod params;
mod payment_url;
mod query;
pub mod response_code;
mod signature;

pub use amount::{Amount, GATEWAY_SCALE};
pub use banks::{supported_banks, Bank, SUPPORTED_BANKS};
pub use callback::{CallbackFields, CallbackVerifier, ReturnOutcome, VerificationResult};
pub use credentials::GatewayCredentials;
pub use errors::VnpayError;
pub use ipn::{IpnAcknowledgement, IpnResponseCode};
pub use params::{canonicalize, encode_component, encode_value, CanonicalString, ParameterSet};
pub use payment_url::{
    fold_description, sanitize_order_reference, PaymentRequest, PaymentUrl, PaymentUrlBuilder,
};
pub use query::QueryRequestBuilder;
pub use response_code::describe;
pub use signature::{SignatureEngine, SignedPayload};
