//! In-process adapters.

mod order_repository;

pub use order_repository::InMemoryOrderRepository;
