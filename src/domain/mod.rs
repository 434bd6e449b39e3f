//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, state machine trait)
//! - `vnpay` - Gateway signing and verification core
//! - `order` - Payment order aggregate and status lifecycle

pub mod foundation;
pub mod order;
pub mod vnpay;
