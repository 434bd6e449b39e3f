//! Order read endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{OrderEnvelope, OrderResponse, PaymentStatusResponse};
pub use routes::order_routes;
