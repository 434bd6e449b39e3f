//! TransactionQueryClient port - outbound `querydr` calls to the gateway.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::vnpay::{fields, SignedPayload};

/// Errors from the gateway query API.
///
/// Kept apart from `DomainError` so the HTTP layer can tell a gateway
/// outage from a local failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryClientError {
    #[error("Transaction query API is not configured")]
    NotConfigured,

    #[error("Transaction query timed out")]
    Timeout,

    #[error("Transaction query transport error: {0}")]
    Transport(String),

    #[error("Transaction query returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl QueryClientError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, QueryClientError::Timeout | QueryClientError::Transport(_))
    }
}

/// The gateway's JSON answer, passed through as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TransactionQueryResponse {
    fields: Map<String, Value>,
}

impl TransactionQueryResponse {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn response_code(&self) -> Option<&str> {
        self.get(fields::RESPONSE_CODE)
    }

    pub fn transaction_status(&self) -> Option<&str> {
        self.get(fields::TRANSACTION_STATUS)
    }

    pub fn message(&self) -> Option<&str> {
        self.get("vnp_Message")
    }
}

/// Port for the gateway's transaction status API.
#[async_trait]
pub trait TransactionQueryClient: Send + Sync {
    /// POST a signed `querydr` payload and return the gateway's answer.
    async fn query(
        &self,
        payload: &SignedPayload,
    ) -> Result<TransactionQueryResponse, QueryClientError>;
}
