//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `OrderRepository` - order storage and the IPN idempotency guard
//! - `TransactionQueryClient` - the gateway's transaction status API

mod order_repository;
mod transaction_query_client;

pub use order_repository::{FinalizeResult, OrderRepository};
pub use transaction_query_client::{
    QueryClientError, TransactionQueryClient, TransactionQueryResponse,
};
