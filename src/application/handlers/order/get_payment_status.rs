//! GetPaymentStatusHandler - Query handler for an order's payment status.

use std::sync::Arc;

use crate::application::PaymentError;
use crate::domain::order::PaymentStatus;
use crate::ports::OrderRepository;

use super::lookup_order;

#[derive(Debug, Clone)]
pub struct GetPaymentStatusQuery {
    /// Gateway reference or merchant order id.
    pub order_id: String,
}

/// Read model answered to clients polling for the payment outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentStatusView {
    pub order_reference: String,
    pub is_paid: bool,
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_no: Option<String>,
}

pub struct GetPaymentStatusHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetPaymentStatusHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetPaymentStatusQuery,
    ) -> Result<PaymentStatusView, PaymentError> {
        let order = lookup_order(self.repository.as_ref(), &query.order_id).await?;

        Ok(PaymentStatusView {
            is_paid: order.is_paid(),
            status: order.status,
            payment_method: Some(order.payment_method.clone()).filter(|m| !m.is_empty()),
            transaction_no: order.transaction_no().map(str::to_string),
            order_reference: order.reference,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::domain::order::{Order, TransactionDetails};
    use crate::domain::vnpay::Amount;

    const REFERENCE: &str = "ORD11700000000000";

    async fn repo_with(order: Order) -> Arc<InMemoryOrderRepository> {
        let repo = Arc::new(InMemoryOrderRepository::new());
        repo.save(&order).await.unwrap();
        repo
    }

    fn pending() -> Order {
        Order::create_pending(REFERENCE, "ORD-1", Amount::from_major(50_000).unwrap(), "Don hang")
    }

    async fn status(repo: Arc<InMemoryOrderRepository>) -> PaymentStatusView {
        GetPaymentStatusHandler::new(repo)
            .handle(GetPaymentStatusQuery {
                order_id: REFERENCE.to_string(),
            })
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn pending_order_is_not_paid() {
        let view = status(repo_with(pending()).await).await;

        assert!(!view.is_paid);
        assert_eq!(view.status, PaymentStatus::Pending);
        assert_eq!(view.payment_method.as_deref(), Some("vnpay"));
        assert_eq!(view.transaction_no, None);
    }

    #[tokio::test]
    async fn paid_order_reports_transaction() {
        let mut order = pending();
        order
            .settle(TransactionDetails {
                response_code: "00".to_string(),
                transaction_no: Some("14123456".to_string()),
                ..Default::default()
            })
            .unwrap();

        let view = status(repo_with(order).await).await;

        assert!(view.is_paid);
        assert_eq!(view.status, PaymentStatus::Paid);
        assert_eq!(view.transaction_no.as_deref(), Some("14123456"));
    }
}
