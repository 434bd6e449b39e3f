//! HTTP handlers for order read endpoints.

use axum::extract::{Json, Path, State};
use axum::response::IntoResponse;

use crate::application::{GetOrderQuery, GetPaymentStatusQuery};

use super::dto::{OrderEnvelope, OrderResponse, PaymentStatusResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// GET /orders/:order_id - Order details
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_order_handler();

    let order = handler.handle(GetOrderQuery { order_id }).await?;

    Ok(Json(OrderEnvelope {
        success: true,
        order: OrderResponse::from(order),
    }))
}

/// GET /orders/:order_id/payment-status - Poll the payment outcome
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let handler = state.get_payment_status_handler();

    let view = handler.handle(GetPaymentStatusQuery { order_id }).await?;

    Ok(Json(PaymentStatusResponse::from(view)))
}
