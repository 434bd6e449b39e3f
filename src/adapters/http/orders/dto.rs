//! Response DTOs for the order read endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::PaymentStatusView;
use crate::domain::order::{Order, PaymentStatus};

#[derive(Debug, Clone, Serialize)]
pub struct OrderEnvelope {
    pub success: bool,
    pub order: OrderResponse,
}

/// Full order record as stored, with gateway transaction details flattened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Gateway reference (`vnp_TxnRef`).
    pub id: String,
    pub order_id: String,
    pub amount: f64,
    pub description: String,
    pub payment_status: PaymentStatus,
    pub payment_method: String,
    pub response_code: Option<String>,
    pub transaction_no: Option<String>,
    pub bank_code: Option<String>,
    pub bank_tran_no: Option<String>,
    pub card_type: Option<String>,
    pub pay_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let transaction = order.transaction.unwrap_or_default();
        let response_code = Some(transaction.response_code).filter(|code| !code.is_empty());

        Self {
            id: order.reference,
            order_id: order.merchant_order_id,
            amount: order.amount.major(),
            description: order.description,
            payment_status: order.status,
            payment_method: order.payment_method,
            response_code,
            transaction_no: transaction.transaction_no,
            bank_code: transaction.bank_code,
            bank_tran_no: transaction.bank_tran_no,
            card_type: transaction.card_type,
            pay_date: transaction.pay_date,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    pub success: bool,
    pub is_paid: bool,
    pub payment_status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_no: Option<String>,
}

impl From<PaymentStatusView> for PaymentStatusResponse {
    fn from(view: PaymentStatusView) -> Self {
        Self {
            success: true,
            is_paid: view.is_paid,
            payment_status: view.status,
            payment_method: view.payment_method,
            transaction_no: view.transaction_no,
        }
    }
}
