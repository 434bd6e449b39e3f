//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod order;
pub mod payment;

#[cfg(test)]
pub(crate) mod test_support;

pub use order::{
    GetOrderHandler, GetOrderQuery, GetPaymentStatusHandler, GetPaymentStatusQuery,
    PaymentStatusView,
};
pub use payment::{
    CreatePaymentUrlCommand, CreatePaymentUrlHandler, CreatePaymentUrlResult, HandleIpnCommand,
    HandleIpnHandler, HandleReturnHandler, HandleReturnQuery, QueryTransactionHandler,
    QueryTransactionQuery, QueryTransactionResult,
};
