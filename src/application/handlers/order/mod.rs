//! Order read handlers.
//!
//! Orders can be looked up either by gateway reference or by the merchant
//! order id the client originally sent; the latter resolves to the most
//! recent attempt.

mod get_order;
mod get_payment_status;

pub use get_order::{GetOrderHandler, GetOrderQuery};
pub use get_payment_status::{GetPaymentStatusHandler, GetPaymentStatusQuery, PaymentStatusView};

use crate::application::PaymentError;
use crate::domain::order::Order;
use crate::ports::OrderRepository;

async fn lookup_order(repository: &dyn OrderRepository, id: &str) -> Result<Order, PaymentError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(PaymentError::validation("orderId", "Order ID is required"));
    }

    if let Some(order) = repository.find_by_reference(id).await? {
        return Ok(order);
    }

    repository
        .find_latest_by_merchant_order(id)
        .await?
        .ok_or_else(|| PaymentError::order_not_found(id))
}
