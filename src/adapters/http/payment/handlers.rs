//! HTTP handlers for the VNPAY payment endpoints.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::{HandleIpnCommand, HandleReturnQuery, QueryTransactionQuery};
use crate::domain::vnpay::{supported_banks, IpnAcknowledgement, ParameterSet, ReturnOutcome};

use super::dto::{
    BanksResponse, CreatePaymentUrlRequest, CreatePaymentUrlResponse, QueryTransactionRequest,
    QueryTransactionResponse, ReturnResponse,
};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::ClientIp;
use crate::adapters::http::state::AppState;

type CallbackQuery = Option<Query<HashMap<String, String>>>;

fn callback_params(query: CallbackQuery) -> ParameterSet {
    query
        .map(|Query(params)| ParameterSet::from(params))
        .unwrap_or_default()
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /create-payment-url - Sign a payment URL for a new order
pub async fn create_payment_url(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    payload: Result<Json<CreatePaymentUrlRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let handler = state.create_payment_url_handler();

    let result = handler.handle(request.into_command(client_ip)).await?;

    Ok(Json(CreatePaymentUrlResponse::from(result)))
}

/// POST /query-transaction - Ask the gateway for a transaction's status
pub async fn query_transaction(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    payload: Result<Json<QueryTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = payload?;
    let handler = state.query_transaction_handler();
    let query = QueryTransactionQuery {
        order_id: request.order_id.unwrap_or_default(),
        trans_date: request.trans_date.unwrap_or_default(),
        client_ip,
    };

    let result = handler.handle(query).await?;

    Ok(Json(QueryTransactionResponse {
        success: true,
        data: result.response,
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Gateway Callbacks (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /return - Browser redirect after checkout
pub async fn payment_return(State(state): State<AppState>, query: CallbackQuery) -> Response {
    let handler = state.handle_return_handler();
    let outcome = handler.handle(HandleReturnQuery {
        params: callback_params(query),
    });

    match outcome {
        ReturnOutcome::Succeeded(fields) => {
            (StatusCode::OK, Json(ReturnResponse::succeeded(&fields))).into_response()
        }
        ReturnOutcome::Failed(fields) => {
            (StatusCode::BAD_REQUEST, Json(ReturnResponse::failed(&fields))).into_response()
        }
        ReturnOutcome::InvalidSignature => {
            (StatusCode::BAD_REQUEST, Json(ReturnResponse::invalid_signature())).into_response()
        }
    }
}

/// GET /ipn - Server-to-server notification
///
/// Always answers 200; the outcome is carried in `RspCode`.
pub async fn payment_ipn(
    State(state): State<AppState>,
    query: CallbackQuery,
) -> (StatusCode, Json<IpnAcknowledgement>) {
    let handler = state.handle_ipn_handler();
    let ack = handler
        .handle(HandleIpnCommand {
            params: callback_params(query),
        })
        .await;

    (StatusCode::OK, Json(ack))
}

// ════════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════════

/// GET /banks - Banks and methods offered on the checkout page
pub async fn list_banks() -> Json<BanksResponse> {
    Json(BanksResponse {
        success: true,
        banks: supported_banks(),
    })
}
