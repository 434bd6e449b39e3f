//! Use-case error type shared by the payment and order handlers.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | OrderNotFound | 404 |
//! | DuplicateReference | 409 |
//! | Gateway | 502 |
//! | GatewayNotConfigured | 503 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::ports::QueryClientError;

/// Errors returned by application handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// Caller input was rejected before reaching the gateway core.
    ValidationFailed { field: String, message: String },

    /// No order matches the given id or reference.
    OrderNotFound(String),

    /// An order with this gateway reference already exists.
    DuplicateReference(String),

    /// The gateway's API failed or answered with garbage.
    Gateway { reason: String, retryable: bool },

    /// The gateway's query API has no configured endpoint.
    GatewayNotConfigured,

    /// Storage or other local failure.
    Infrastructure(String),
}

impl PaymentError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn order_not_found(id: impl Into<String>) -> Self {
        PaymentError::OrderNotFound(id.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PaymentError::OrderNotFound(_) => ErrorCode::OrderNotFound,
            PaymentError::DuplicateReference(_) => ErrorCode::DuplicateOrder,
            PaymentError::Gateway { .. } => ErrorCode::GatewayError,
            PaymentError::GatewayNotConfigured => ErrorCode::GatewayNotConfigured,
            PaymentError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    /// Returns a user-facing error message.
    pub fn message(&self) -> String {
        match self {
            PaymentError::ValidationFailed { message, .. } => message.clone(),
            PaymentError::OrderNotFound(_) => "Order not found".to_string(),
            PaymentError::DuplicateReference(reference) => {
                format!("Order reference {} already exists", reference)
            }
            PaymentError::Gateway { reason, .. } => {
                format!("Payment gateway request failed: {}", reason)
            }
            PaymentError::GatewayNotConfigured => {
                "Transaction query is not configured".to_string()
            }
            PaymentError::Infrastructure(_) => "Internal server error".to_string(),
        }
    }

    /// Returns true if this error should trigger a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            PaymentError::Gateway { retryable, .. } => *retryable,
            PaymentError::Infrastructure(_) => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Keep the cause in logs; `message()` hides it from clients.
            PaymentError::Infrastructure(cause) => write!(f, "Infrastructure error: {}", cause),
            other => write!(f, "{}", other.message()),
        }
    }
}

impl std::error::Error for PaymentError {}

impl From<DomainError> for PaymentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed => PaymentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::OrderNotFound => PaymentError::OrderNotFound(
                err.details.get("reference").cloned().unwrap_or_default(),
            ),
            ErrorCode::DuplicateOrder => PaymentError::DuplicateReference(
                err.details.get("reference").cloned().unwrap_or_default(),
            ),
            _ => PaymentError::Infrastructure(err.to_string()),
        }
    }
}

impl From<ValidationError> for PaymentError {
    fn from(err: ValidationError) -> Self {
        PaymentError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<QueryClientError> for PaymentError {
    fn from(err: QueryClientError) -> Self {
        match err {
            QueryClientError::NotConfigured => PaymentError::GatewayNotConfigured,
            other => PaymentError::Gateway {
                retryable: other.is_retryable(),
                reason: other.to_string(),
            },
        }
    }
}
