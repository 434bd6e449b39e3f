//! Signed `querydr` payloads for the transaction-status API.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use super::credentials::GatewayCredentials;
use super::fields;
use super::params::ParameterSet;
use super::signature::SignedPayload;

/// Builds the signed body POSTed to the gateway's query endpoint.
///
/// Same pipeline as payment URLs with a narrower field set: no amount,
/// no return URL, no locale.
#[derive(Debug, Clone)]
pub struct QueryRequestBuilder {
    credentials: Arc<GatewayCredentials>,
}

impl QueryRequestBuilder {
    pub fn new(credentials: Arc<GatewayCredentials>) -> Self {
        Self { credentials }
    }

    /// `transaction_date` is the `vnp_CreateDate` of the original payment.
    pub fn build_query_payload(
        &self,
        order_reference: &str,
        transaction_date: &str,
        client_ip: &str,
    ) -> SignedPayload {
        self.build_query_payload_at(
            order_reference,
            transaction_date,
            client_ip,
            Local::now().naive_local(),
        )
    }

    pub fn build_query_payload_at(
        &self,
        order_reference: &str,
        transaction_date: &str,
        client_ip: &str,
        requested_at: NaiveDateTime,
    ) -> SignedPayload {
        let params = ParameterSet::new()
            .with(fields::VERSION, fields::PROTOCOL_VERSION)
            .with(fields::COMMAND, fields::COMMAND_QUERY)
            .with(fields::TMN_CODE, self.credentials.tmn_code())
            .with(fields::TXN_REF, order_reference)
            .with(
                fields::ORDER_INFO,
                format!("Query transaction {}", order_reference),
            )
            .with(fields::TRANSACTION_DATE, transaction_date)
            .with(
                fields::CREATE_DATE,
                requested_at.format(fields::TIMESTAMP_FORMAT),
            )
            .with(fields::IP_ADDR, client_ip);

        self.credentials.signer().sign_parameters(params)
    }
}
