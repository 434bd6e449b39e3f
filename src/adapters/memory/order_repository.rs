//! In-Memory Order Repository
//!
//! Keeps orders in a process-local map. Used for development runs without
//! a database and for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::order::Order;
use crate::ports::{FinalizeResult, OrderRepository};

/// In-memory order storage keyed by gateway reference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored orders (useful for tests)
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.reference) {
            return Err(DomainError::new(
                ErrorCode::DuplicateOrder,
                format!("Order {} already exists", order.reference),
            )
            .with_detail("reference", order.reference.clone()));
        }
        orders.insert(order.reference.clone(), order.clone());
        Ok(())
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>, DomainError> {
        Ok(self.orders.read().await.get(reference).cloned())
    }

    async fn find_latest_by_merchant_order(
        &self,
        merchant_order_id: &str,
    ) -> Result<Option<Order>, DomainError> {
        let orders = self.orders.read().await;
        Ok(orders
            .values()
            .filter(|o| o.merchant_order_id == merchant_order_id)
            .max_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.reference.cmp(&b.reference))
            })
            .cloned())
    }

    async fn finalize(&self, order: &Order) -> Result<FinalizeResult, DomainError> {
        // Check and write under one write lock so concurrent IPNs serialize.
        let mut orders = self.orders.write().await;
        let stored = orders.get_mut(&order.reference).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order {} not found", order.reference),
            )
            .with_detail("reference", order.reference.clone())
        })?;

        if stored.is_finalized() {
            return Ok(FinalizeResult::AlreadyFinalized);
        }

        stored.status = order.status;
        stored.transaction = order.transaction.clone();
        stored.updated_at = order.updated_at;
        Ok(FinalizeResult::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{PaymentStatus, TransactionDetails};
    use crate::domain::vnpay::Amount;

    fn order(reference: &str, merchant_id: &str) -> Order {
        Order::create_pending(
            reference,
            merchant_id,
            Amount::from_major(100_000).unwrap(),
            "Thanh toan",
        )
    }

    fn settled(mut order: Order, code: &str) -> Order {
        order
            .settle(TransactionDetails {
                response_code: code.to_string(),
                ..Default::default()
            })
            .unwrap();
        order
    }

    #[tokio::test]
    async fn save_then_find() {
        let repo = InMemoryOrderRepository::new();
        repo.save(&order("REF1", "ORD-1")).await.unwrap();

        let found = repo.find_by_reference("REF1").await.unwrap();

        assert_eq!(found.map(|o| o.merchant_order_id), Some("ORD-1".to_string()));
        assert!(repo.find_by_reference("REF2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_reference_is_rejected() {
        let repo = InMemoryOrderRepository::new();
        repo.save(&order("REF1", "ORD-1")).await.unwrap();

        let err = repo.save(&order("REF1", "ORD-1")).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateOrder);
        assert_eq!(repo.order_count().await, 1);
    }

    #[tokio::test]
    async fn latest_by_merchant_order_picks_newest() {
        let repo = InMemoryOrderRepository::new();
        let first = order("REF1", "ORD-1");
        let mut second = order("REF2", "ORD-1");
        second.created_at = first.created_at + chrono::Duration::seconds(5);
        repo.save(&first).await.unwrap();
        repo.save(&second).await.unwrap();
        repo.save(&order("REF3", "ORD-2")).await.unwrap();

        let latest = repo.find_latest_by_merchant_order("ORD-1").await.unwrap();

        assert_eq!(latest.map(|o| o.reference), Some("REF2".to_string()));
    }

    #[tokio::test]
    async fn finalize_applies_once() {
        let repo = InMemoryOrderRepository::new();
        let pending = order("REF1", "ORD-1");
        repo.save(&pending).await.unwrap();

        let first = repo.finalize(&settled(pending.clone(), "00")).await.unwrap();
        let second = repo.finalize(&settled(pending, "24")).await.unwrap();

        assert_eq!(first, FinalizeResult::Applied);
        assert_eq!(second, FinalizeResult::AlreadyFinalized);
        let stored = repo.find_by_reference("REF1").await.unwrap().unwrap();
        assert_eq!(stored.status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn finalize_unknown_order_fails() {
        let repo = InMemoryOrderRepository::new();

        let err = repo
            .finalize(&settled(order("NOPE", "ORD-1"), "00"))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OrderNotFound);
    }
}
