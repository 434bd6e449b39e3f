//! Shared application state.

use std::sync::Arc;

use crate::application::{
    CreatePaymentUrlHandler, GetOrderHandler, GetPaymentStatusHandler, HandleIpnHandler,
    HandleReturnHandler, QueryTransactionHandler,
};
use crate::domain::vnpay::{
    CallbackVerifier, GatewayCredentials, PaymentUrlBuilder, QueryRequestBuilder,
};
use crate::ports::{OrderRepository, TransactionQueryClient};

/// Dependencies shared by every request.
///
/// Cloned per request; everything inside is behind an `Arc`. Handlers are
/// built on demand from these parts.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<GatewayCredentials>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub query_client: Arc<dyn TransactionQueryClient>,
}

impl AppState {
    pub fn new(
        credentials: Arc<GatewayCredentials>,
        order_repository: Arc<dyn OrderRepository>,
        query_client: Arc<dyn TransactionQueryClient>,
    ) -> Self {
        Self {
            credentials,
            order_repository,
            query_client,
        }
    }

    pub fn create_payment_url_handler(&self) -> CreatePaymentUrlHandler {
        CreatePaymentUrlHandler::new(
            PaymentUrlBuilder::new(self.credentials.clone()),
            self.order_repository.clone(),
        )
    }

    pub fn handle_return_handler(&self) -> HandleReturnHandler {
        HandleReturnHandler::new(CallbackVerifier::new(self.credentials.clone()))
    }

    pub fn handle_ipn_handler(&self) -> HandleIpnHandler {
        HandleIpnHandler::new(
            CallbackVerifier::new(self.credentials.clone()),
            self.order_repository.clone(),
        )
    }

    pub fn query_transaction_handler(&self) -> QueryTransactionHandler {
        QueryTransactionHandler::new(
            QueryRequestBuilder::new(self.credentials.clone()),
            self.query_client.clone(),
        )
    }

    pub fn get_order_handler(&self) -> GetOrderHandler {
        GetOrderHandler::new(self.order_repository.clone())
    }

    pub fn get_payment_status_handler(&self) -> GetPaymentStatusHandler {
        GetPaymentStatusHandler::new(self.order_repository.clone())
    }
}
