//! VNPAY transaction query adapter.
//!
//! Implements `TransactionQueryClient` over the gateway's `querydr` JSON
//! API. A single attempt per call; callers decide whether to retry.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::vnpay::SignedPayload;
use crate::ports::{QueryClientError, TransactionQueryClient, TransactionQueryResponse};

/// Reqwest-backed client for the gateway's query endpoint.
pub struct VnpayQueryClient {
    query_url: String,
    http_client: reqwest::Client,
}

impl VnpayQueryClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(query_url: impl Into<String>, timeout: Duration) -> Result<Self, QueryClientError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryClientError::Transport(e.to_string()))?;

        Ok(Self {
            query_url: query_url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl TransactionQueryClient for VnpayQueryClient {
    async fn query(
        &self,
        payload: &SignedPayload,
    ) -> Result<TransactionQueryResponse, QueryClientError> {
        let response = self
            .http_client
            .post(&self.query_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    QueryClientError::Timeout
                } else {
                    QueryClientError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, error = %error_text, "VNPAY querydr failed");
            return Err(QueryClientError::Transport(format!(
                "gateway answered HTTP {}",
                status
            )));
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                QueryClientError::Timeout
            } else {
                QueryClientError::InvalidResponse(e.to_string())
            }
        })?;

        match body {
            Value::Object(map) => Ok(TransactionQueryResponse::new(map)),
            other => Err(QueryClientError::InvalidResponse(format!(
                "expected JSON object, got {}",
                other
            ))),
        }
    }
}

/// Stand-in used when no query URL is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledQueryClient;

#[async_trait]
impl TransactionQueryClient for DisabledQueryClient {
    async fn query(
        &self,
        _payload: &SignedPayload,
    ) -> Result<TransactionQueryResponse, QueryClientError> {
        Err(QueryClientError::NotConfigured)
    }
}
