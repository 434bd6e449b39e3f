//! Axum router configuration for order endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_order, get_payment_status};
use crate::adapters::http::state::AppState;

/// Create the order router, mounted at `/orders`.
///
/// # Routes
/// - `GET /:order_id` - Order details
/// - `GET /:order_id/payment-status` - Payment status
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/:order_id", get(get_order))
        .route("/:order_id/payment-status", get(get_payment_status))
}
