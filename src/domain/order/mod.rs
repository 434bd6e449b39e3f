//! Payment orders tracked across the return and IPN flows.

mod order;
mod status;

pub use order::{Order, TransactionDetails, PAYMENT_METHOD_VNPAY};
pub use status::PaymentStatus;
