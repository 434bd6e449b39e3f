//! Verification of inbound return and IPN callbacks.
//!
//! Both callbacks carry the same signed field set; they differ only in
//! what the caller does with the result. A bad signature is an expected
//! adversarial input, so it is reported as data rather than an error.

use std::sync::Arc;

use super::amount::Amount;
use super::credentials::GatewayCredentials;
use super::fields;
use super::params::ParameterSet;

/// Business fields extracted from a callback whose signature checked out.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackFields {
    pub order_reference: String,
    pub response_code: String,
    pub transaction_status: Option<String>,
    /// `None` when `vnp_Amount` is absent or not a positive integer.
    pub amount: Option<Amount>,
    pub bank_code: Option<String>,
    pub bank_tran_no: Option<String>,
    pub card_type: Option<String>,
    pub order_info: Option<String>,
    pub pay_date: Option<String>,
    pub transaction_no: Option<String>,
}

impl CallbackFields {
    fn extract(params: &ParameterSet) -> Self {
        let owned = |key: &str| params.get_non_empty(key).map(str::to_string);

        Self {
            order_reference: owned(fields::TXN_REF).unwrap_or_default(),
            response_code: owned(fields::RESPONSE_CODE).unwrap_or_default(),
            transaction_status: owned(fields::TRANSACTION_STATUS),
            amount: params
                .get_non_empty(fields::AMOUNT)
                .and_then(Amount::parse_gateway_units),
            bank_code: owned(fields::BANK_CODE),
            bank_tran_no: owned(fields::BANK_TRAN_NO),
            card_type: owned(fields::CARD_TYPE),
            order_info: owned(fields::ORDER_INFO),
            pay_date: owned(fields::PAY_DATE),
            transaction_no: owned(fields::TRANSACTION_NO),
        }
    }

    /// True when the gateway reports the payment as successful.
    pub fn is_success(&self) -> bool {
        self.response_code == fields::RESPONSE_CODE_SUCCESS
    }
}

/// Outcome of checking a callback's secure hash.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    pub is_valid_signature: bool,
    /// Present only when the signature is valid.
    pub fields: Option<CallbackFields>,
}

impl VerificationResult {
    fn invalid() -> Self {
        Self {
            is_valid_signature: false,
            fields: None,
        }
    }
}

/// Three-way outcome of the browser return flow.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnOutcome {
    Succeeded(CallbackFields),
    Failed(CallbackFields),
    InvalidSignature,
}

impl From<VerificationResult> for ReturnOutcome {
    fn from(result: VerificationResult) -> Self {
        match result.fields {
            Some(fields) if result.is_valid_signature => {
                if fields.is_success() {
                    ReturnOutcome::Succeeded(fields)
                } else {
                    ReturnOutcome::Failed(fields)
                }
            }
            _ => ReturnOutcome::InvalidSignature,
        }
    }
}

/// Recomputes and checks the secure hash of inbound callbacks.
#[derive(Debug, Clone)]
pub struct CallbackVerifier {
    credentials: Arc<GatewayCredentials>,
}

impl CallbackVerifier {
    pub fn new(credentials: Arc<GatewayCredentials>) -> Self {
        Self { credentials }
    }

    /// Strips the signature fields, re-signs the remainder and compares.
    pub fn verify_callback(&self, mut params: ParameterSet) -> VerificationResult {
        let Some(candidate) = params.take_signature() else {
            return VerificationResult::invalid();
        };

        let canonical = params.canonicalize();
        if !self.credentials.signer().verify(&canonical, &candidate) {
            return VerificationResult::invalid();
        }

        VerificationResult {
            is_valid_signature: true,
            fields: Some(CallbackFields::extract(&params)),
        }
    }

    /// Verifies a browser return and classifies it.
    pub fn verify_return(&self, params: ParameterSet) -> ReturnOutcome {
        self.verify_callback(params).into()
    }
}
