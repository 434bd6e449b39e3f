//! QueryTransactionHandler - Query handler for the gateway's `querydr` API.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::application::PaymentError;
use crate::domain::vnpay::{fields, QueryRequestBuilder, SignedPayload};
use crate::ports::{TransactionQueryClient, TransactionQueryResponse};

/// Query for the gateway-side status of a transaction.
#[derive(Debug, Clone)]
pub struct QueryTransactionQuery {
    /// Gateway reference (`vnp_TxnRef`) of the payment.
    pub order_id: String,
    /// `vnp_CreateDate` of the payment, `YYYYMMDDHHmmss`.
    pub trans_date: String,
    pub client_ip: String,
}

#[derive(Debug, Clone)]
pub struct QueryTransactionResult {
    pub request: SignedPayload,
    pub response: TransactionQueryResponse,
}

pub struct QueryTransactionHandler {
    builder: QueryRequestBuilder,
    client: Arc<dyn TransactionQueryClient>,
}

impl QueryTransactionHandler {
    pub fn new(builder: QueryRequestBuilder, client: Arc<dyn TransactionQueryClient>) -> Self {
        Self { builder, client }
    }

    pub async fn handle(
        &self,
        query: QueryTransactionQuery,
    ) -> Result<QueryTransactionResult, PaymentError> {
        if query.order_id.trim().is_empty() || query.trans_date.trim().is_empty() {
            return Err(PaymentError::validation(
                "orderId",
                "Order ID and transaction date are required",
            ));
        }
        if NaiveDateTime::parse_from_str(&query.trans_date, fields::TIMESTAMP_FORMAT).is_err() {
            return Err(PaymentError::validation(
                "transDate",
                "Transaction date must be formatted as YYYYMMDDHHmmss",
            ));
        }

        let request =
            self.builder
                .build_query_payload(&query.order_id, &query.trans_date, &query.client_ip);

        let response = self.client.query(&request).await.map_err(|err| {
            warn!(order_reference = %query.order_id, error = %err, "VNPAY query failed");
            PaymentError::from(err)
        })?;

        info!(
            order_reference = %query.order_id,
            response_code = response.response_code().unwrap_or(""),
            transaction_status = response.transaction_status().unwrap_or(""),
            "VNPAY transaction queried"
        );

        Ok(QueryTransactionResult { request, response })
    }
}
