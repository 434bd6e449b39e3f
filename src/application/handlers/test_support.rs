//! Shared fixtures for handler tests.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::order::Order;
use crate::domain::vnpay::{fields, GatewayCredentials, ParameterSet};
use crate::ports::{FinalizeResult, OrderRepository};

pub const TEST_SECRET: &str = "HANDLERTESTSECRET";

pub fn credentials() -> Arc<GatewayCredentials> {
    Arc::new(
        GatewayCredentials::new(
            "TESTTMN1",
            &SecretString::new(TEST_SECRET.to_string()),
            "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html",
            "http://localhost:8000/vnpay/return",
            "http://localhost:8000/vnpay/ipn",
        )
        .unwrap(),
    )
}

/// A gateway callback for `reference`, signed with the test secret.
pub fn signed_callback(reference: &str, gateway_amount: u64, response_code: &str) -> ParameterSet {
    let params = ParameterSet::new()
        .with(fields::TMN_CODE, "TESTTMN1")
        .with(fields::TXN_REF, reference)
        .with(fields::AMOUNT, gateway_amount)
        .with(fields::RESPONSE_CODE, response_code)
        .with(fields::TRANSACTION_STATUS, response_code)
        .with(fields::TRANSACTION_NO, "14123456")
        .with(fields::BANK_CODE, "NCB")
        .with(fields::CARD_TYPE, "ATM")
        .with(fields::ORDER_INFO, "Thanh toan don hang")
        .with(fields::PAY_DATE, "20240305091500");

    credentials()
        .signer()
        .sign_parameters(params)
        .to_parameter_set()
        .with(fields::SECURE_HASH_TYPE, "HmacSHA512")
}

/// Repository whose every call fails like an unreachable database.
pub struct FailingOrderRepository;

fn unavailable() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated database outage")
}

#[async_trait]
impl OrderRepository for FailingOrderRepository {
    async fn save(&self, _order: &Order) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn find_by_reference(&self, _reference: &str) -> Result<Option<Order>, DomainError> {
        Err(unavailable())
    }

    async fn find_latest_by_merchant_order(
        &self,
        _merchant_order_id: &str,
    ) -> Result<Option<Order>, DomainError> {
        Err(unavailable())
    }

    async fn finalize(&self, _order: &Order) -> Result<FinalizeResult, DomainError> {
        Err(unavailable())
    }
}
