//! Acknowledgement codes returned to the gateway's IPN calls.
//!
//! The gateway keeps redelivering a notification until it receives one
//! of these codes, so every IPN response, including internal failures,
//! must map onto this set.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpnResponseCode {
    /// Notification processed and the order updated.
    Confirmed,
    OrderNotFound,
    /// The order was finalized by an earlier notification.
    AlreadyConfirmed,
    InvalidAmount,
    /// Secure hash did not match.
    InvalidSignature,
    UnknownError,
}

impl IpnResponseCode {
    pub fn code(&self) -> &'static str {
        match self {
            IpnResponseCode::Confirmed => "00",
            IpnResponseCode::OrderNotFound => "01",
            IpnResponseCode::AlreadyConfirmed => "02",
            IpnResponseCode::InvalidAmount => "04",
            IpnResponseCode::InvalidSignature => "97",
            IpnResponseCode::UnknownError => "99",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            IpnResponseCode::Confirmed => "Confirm Success",
            IpnResponseCode::OrderNotFound => "Order not found",
            IpnResponseCode::AlreadyConfirmed => "Order already confirmed",
            IpnResponseCode::InvalidAmount => "Invalid amount",
            IpnResponseCode::InvalidSignature => "Invalid signature",
            IpnResponseCode::UnknownError => "Unknown error",
        }
    }
}

/// JSON body answered to the gateway: `{"RspCode":"00","Message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpnAcknowledgement {
    #[serde(rename = "RspCode")]
    pub rsp_code: &'static str,
    #[serde(rename = "Message")]
    pub message: &'static str,
}

impl From<IpnResponseCode> for IpnAcknowledgement {
    fn from(code: IpnResponseCode) -> Self {
        Self {
            rsp_code: code.code(),
            message: code.message(),
        }
    }
}
