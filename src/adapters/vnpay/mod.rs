//! VNPAY gateway adapters.

mod query_client;

pub use query_client::{DisabledQueryClient, VnpayQueryClient};
