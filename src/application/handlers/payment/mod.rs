//! Payment handlers.
//!
//! ## Commands
//! - Creating signed payment URLs
//! - Processing gateway IPN notifications
//!
//! ## Queries
//! - Verifying the browser return redirect
//! - Querying transaction status at the gateway

mod create_payment_url;
mod handle_ipn;
mod handle_return;
mod query_transaction;

// Commands
pub use create_payment_url::{
    CreatePaymentUrlCommand, CreatePaymentUrlHandler, CreatePaymentUrlResult,
};
pub use handle_ipn::{HandleIpnCommand, HandleIpnHandler};

// Queries
pub use handle_return::{HandleReturnHandler, HandleReturnQuery};
pub use query_transaction::{
    QueryTransactionHandler, QueryTransactionQuery, QueryTransactionResult,
};
