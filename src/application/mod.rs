//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write order state; query handlers only read.

mod errors;
pub mod handlers;

pub use errors::PaymentError;
pub use handlers::{
    CreatePaymentUrlCommand, CreatePaymentUrlHandler, CreatePaymentUrlResult, GetOrderHandler,
    GetOrderQuery, GetPaymentStatusHandler, GetPaymentStatusQuery, HandleIpnCommand,
    HandleIpnHandler, HandleReturnHandler, HandleReturnQuery, PaymentStatusView,
    QueryTransactionHandler, QueryTransactionQuery, QueryTransactionResult,
};
