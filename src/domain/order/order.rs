//! Payment order aggregate.
//!
//! One order per gateway transaction reference. The order records what
//! the merchant asked the customer to pay, and later the gateway's
//! authoritative verdict from the IPN.

use chrono::{DateTime, Utc};

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};
use crate::domain::vnpay::{fields, Amount, CallbackFields};

use super::PaymentStatus;

/// Payment method recorded on every order this service creates.
pub const PAYMENT_METHOD_VNPAY: &str = "vnpay";

/// Gateway-side details captured when an order is finalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDetails {
    pub response_code: String,
    pub transaction_no: Option<String>,
    pub bank_code: Option<String>,
    pub bank_tran_no: Option<String>,
    pub card_type: Option<String>,
    pub pay_date: Option<String>,
}

impl From<&CallbackFields> for TransactionDetails {
    fn from(fields: &CallbackFields) -> Self {
        Self {
            response_code: fields.response_code.clone(),
            transaction_no: fields.transaction_no.clone(),
            bank_code: fields.bank_code.clone(),
            bank_tran_no: fields.bank_tran_no.clone(),
            card_type: fields.card_type.clone(),
            pay_date: fields.pay_date.clone(),
        }
    }
}

/// Order aggregate.
///
/// # Invariants
///
/// - `reference` is unique and equals the `vnp_TxnRef` sent to the gateway
/// - `transaction` is set exactly when the status is terminal
/// - status only moves `Pending -> Paid` or `Pending -> Failed`
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Gateway transaction reference (sanitized id + timestamp suffix).
    pub reference: String,

    /// Order id as supplied by the merchant's client.
    pub merchant_order_id: String,

    pub amount: Amount,

    /// Description as sent to the gateway (already folded).
    pub description: String,

    pub status: PaymentStatus,

    pub payment_method: String,

    pub transaction: Option<TransactionDetails>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A new order awaiting the gateway's verdict.
    pub fn create_pending(
        reference: impl Into<String>,
        merchant_order_id: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            reference: reference.into(),
            merchant_order_id: merchant_order_id.into(),
            amount,
            description: description.into(),
            status: PaymentStatus::Pending,
            payment_method: PAYMENT_METHOD_VNPAY.to_string(),
            transaction: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    /// True once an IPN has settled the order either way.
    pub fn is_finalized(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn transaction_no(&self) -> Option<&str> {
        self.transaction
            .as_ref()
            .and_then(|t| t.transaction_no.as_deref())
    }

    /// Applies the gateway's verdict: `00` pays the order, anything else
    /// fails it.
    ///
    /// # Errors
    ///
    /// `InvalidStateTransition` if the order is already finalized.
    pub fn settle(&mut self, details: TransactionDetails) -> Result<PaymentStatus, DomainError> {
        let target = if details.response_code == fields::RESPONSE_CODE_SUCCESS {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Failed
        };

        self.transition_to(target)?;
        self.transaction = Some(details);
        self.updated_at = Utc::now();
        Ok(target)
    }

    fn transition_to(&mut self, target: PaymentStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(&target) {
            return Err(DomainError::new(
                ErrorCode::InvalidStateTransition,
                format!(
                    "Cannot transition order {} from {} to {}",
                    self.reference, self.status, target
                ),
            ));
        }
        self.status = target;
        Ok(())
    }
}
