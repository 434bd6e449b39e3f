//! GetOrderHandler - Query handler for order details.

use std::sync::Arc;

use crate::application::PaymentError;
use crate::domain::order::Order;
use crate::ports::OrderRepository;

use super::lookup_order;

#[derive(Debug, Clone)]
pub struct GetOrderQuery {
    /// Gateway reference or merchant order id.
    pub order_id: String,
}

pub struct GetOrderHandler {
    repository: Arc<dyn OrderRepository>,
}

impl GetOrderHandler {
    pub fn new(repository: Arc<dyn OrderRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetOrderQuery) -> Result<Order, PaymentError> {
        lookup_order(self.repository.as_ref(), &query.order_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryOrderRepository;
    use crate::application::handlers::test_support::FailingOrderRepository;
    use crate::domain::vnpay::Amount;

    async fn repo() -> Arc<InMemoryOrderRepository> {
        let repo = Arc::new(InMemoryOrderRepository::new());
        repo.save(&Order::create_pending(
            "ORD11700000000000",
            "ORD-1",
            Amount::from_major(50_000).unwrap(),
            "Don hang",
        ))
        .await
        .unwrap();
        repo
    }

    async fn get(repo: Arc<dyn OrderRepository>, id: &str) -> Result<Order, PaymentError> {
        GetOrderHandler::new(repo)
            .handle(GetOrderQuery {
                order_id: id.to_string(),
            })
            .await
    }

    #[tokio::test]
    async fn finds_by_gateway_reference() {
        let order = get(repo().await, "ORD11700000000000").await.unwrap();
        assert_eq!(order.merchant_order_id, "ORD-1");
    }

    #[tokio::test]
    async fn finds_by_merchant_order_id() {
        let order = get(repo().await, "ORD-1").await.unwrap();
        assert_eq!(order.reference, "ORD11700000000000");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let err = get(repo().await, "ORD-2").await.unwrap_err();
        assert_eq!(err, PaymentError::OrderNotFound("ORD-2".to_string()));
    }

    #[tokio::test]
    async fn blank_id_is_validation_error() {
        let err = get(repo().await, " ").await.unwrap_err();
        assert!(matches!(err, PaymentError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure() {
        let err = get(Arc::new(FailingOrderRepository), "ORD-1").await.unwrap_err();
        assert!(matches!(err, PaymentError::Infrastructure(_)));
    }
}
