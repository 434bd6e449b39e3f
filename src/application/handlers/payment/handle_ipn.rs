//! HandleIpnHandler - Command handler for the gateway's server-to-server IPN.
//!
//! The IPN is the authoritative payment outcome. The gateway redelivers it
//! until it gets a recognised acknowledgement, so this handler never fails:
//! every path, including storage errors, ends in an `IpnAcknowledgement`.
//!
//! Checks run in a fixed order: signature, order exists, order not yet
//! finalized, amount matches. Only then is the order settled.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::PaymentError;
use crate::domain::order::TransactionDetails;
use crate::domain::vnpay::{CallbackVerifier, IpnAcknowledgement, IpnResponseCode, ParameterSet};
use crate::ports::{FinalizeResult, OrderRepository};

/// Command carrying the IPN's query parameters.
#[derive(Debug, Clone)]
pub struct HandleIpnCommand {
    pub params: ParameterSet,
}

pub struct HandleIpnHandler {
    verifier: CallbackVerifier,
    repository: Arc<dyn OrderRepository>,
}

impl HandleIpnHandler {
    pub fn new(verifier: CallbackVerifier, repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            verifier,
            repository,
        }
    }

    pub async fn handle(&self, cmd: HandleIpnCommand) -> IpnAcknowledgement {
        let code = match self.process(cmd).await {
            Ok(code) => code,
            Err(err) => {
                error!(error = %err, "VNPAY IPN processing failed");
                IpnResponseCode::UnknownError
            }
        };
        code.into()
    }

    async fn process(&self, cmd: HandleIpnCommand) -> Result<IpnResponseCode, PaymentError> {
        // 1. Signature
        let verification = self.verifier.verify_callback(cmd.params);
        let fields = match verification.fields {
            Some(fields) if verification.is_valid_signature => fields,
            _ => {
                warn!("VNPAY IPN rejected: invalid signature");
                return Ok(IpnResponseCode::InvalidSignature);
            }
        };
        let reference = fields.order_reference.as_str();

        // 2. Order exists
        let Some(mut order) = self.repository.find_by_reference(reference).await? else {
            warn!(order_reference = %reference, "VNPAY IPN for unknown order");
            return Ok(IpnResponseCode::OrderNotFound);
        };

        // 3. Not already finalized
        if order.is_finalized() {
            info!(
                order_reference = %reference,
                status = %order.status,
                "VNPAY IPN for already finalized order"
            );
            return Ok(IpnResponseCode::AlreadyConfirmed);
        }

        // 4. Amount matches, compared in gateway units
        if fields.amount != Some(order.amount) {
            warn!(
                order_reference = %reference,
                expected = order.amount.gateway_units(),
                received = ?fields.amount.map(|a| a.gateway_units()),
                "VNPAY IPN amount mismatch"
            );
            return Ok(IpnResponseCode::InvalidAmount);
        }

        // 5. Settle; the conditional write is the idempotency guard
        let status = order.settle(TransactionDetails::from(&fields))?;
        match self.repository.finalize(&order).await? {
            FinalizeResult::Applied => {
                info!(
                    order_reference = %reference,
                    response_code = %fields.response_code,
                    status = %status,
                    transaction_no = fields.transaction_no.as_deref().unwrap_or(""),
                    "VNPAY IPN settled order"
                );
                Ok(IpnResponseCode::Confirmed)
            }
            FinalizeResult::AlreadyFinalized => {
                info!(
                    order_reference = %reference,
                    "VNPAY IPN lost race to a concurrent notification"
                );
                Ok(IpnResponseCode::AlreadyConfirmed)
            }
        }
    }
}
