//! Adapters - Implementations of port interfaces.
//!
//! - `http` - axum endpoints
//! - `memory` - in-process order storage
//! - `postgres` - sqlx order storage
//! - `vnpay` - the gateway's query API client

pub mod http;
pub mod memory;
pub mod postgres;
pub mod vnpay;
