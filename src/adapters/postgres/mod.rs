//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresOrderRepository` - payment order storage and IPN finalization

mod order_repository;

pub use order_repository::PostgresOrderRepository;
