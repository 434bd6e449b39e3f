//! OrderRepository port - external order storage for the payment flows.
//!
//! The IPN endpoint may be called several times for the same transaction,
//! concurrently or out of order. `finalize` is therefore a conditional
//! write: it only succeeds while the stored order is still pending, and it
//! is the single place where an order's outcome is recorded.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::order::Order;

/// Result of attempting to finalize an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalizeResult {
    /// The stored order was pending and now carries the new outcome.
    Applied,
    /// Another notification finalized the order first; nothing was written.
    AlreadyFinalized,
}

/// Port for persisting payment orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Insert a new order.
    ///
    /// # Errors
    ///
    /// - `DuplicateOrder` if the reference is already stored
    /// - `DatabaseError` on storage failure
    async fn save(&self, order: &Order) -> Result<(), DomainError>;

    /// Find an order by its gateway transaction reference.
    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>, DomainError>;

    /// Most recent order created for a merchant order id.
    ///
    /// A merchant order may be retried several times, each attempt with its
    /// own gateway reference.
    async fn find_latest_by_merchant_order(
        &self,
        merchant_order_id: &str,
    ) -> Result<Option<Order>, DomainError>;

    /// Persist the order's terminal status and transaction details, but
    /// only if the stored copy is still pending.
    ///
    /// # Errors
    ///
    /// - `OrderNotFound` if no order has this reference
    /// - `DatabaseError` on storage failure
    async fn finalize(&self, order: &Order) -> Result<FinalizeResult, DomainError>;
}
