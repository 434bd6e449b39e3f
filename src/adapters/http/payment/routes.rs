//! Axum router configuration for the payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_payment_url, list_banks, payment_ipn, payment_return, query_transaction,
};
use crate::adapters::http::state::AppState;

/// Create the payment router, mounted under the configured prefix.
///
/// # Routes
/// - `POST /create-payment-url` - Sign a payment URL
/// - `GET /return` - Browser return redirect
/// - `GET /ipn` - Gateway notification (always 200)
/// - `POST /query-transaction` - Gateway transaction query
/// - `GET /banks` - Supported banks
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/create-payment-url", post(create_payment_url))
        .route("/return", get(payment_return))
        .route("/ipn", get(payment_ipn))
        .route("/query-transaction", post(query_transaction))
        .route("/banks", get(list_banks))
}
