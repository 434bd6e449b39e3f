//! HandleReturnHandler - Query handler for the browser return redirect.
//!
//! The return redirect only tells the customer what happened; the order
//! itself is settled by the IPN. Nothing is written here.

use tracing::{info, warn};

use crate::domain::vnpay::{CallbackVerifier, ParameterSet, ReturnOutcome};

/// Query carrying the redirect's query parameters.
#[derive(Debug, Clone)]
pub struct HandleReturnQuery {
    pub params: ParameterSet,
}

pub struct HandleReturnHandler {
    verifier: CallbackVerifier,
}

impl HandleReturnHandler {
    pub fn new(verifier: CallbackVerifier) -> Self {
        Self { verifier }
    }

    pub fn handle(&self, query: HandleReturnQuery) -> ReturnOutcome {
        let outcome = self.verifier.verify_return(query.params);

        match &outcome {
            ReturnOutcome::Succeeded(fields) => info!(
                order_reference = %fields.order_reference,
                transaction_no = fields.transaction_no.as_deref().unwrap_or(""),
                "VNPAY return: payment succeeded"
            ),
            ReturnOutcome::Failed(fields) => info!(
                order_reference = %fields.order_reference,
                response_code = %fields.response_code,
                "VNPAY return: payment failed"
            ),
            ReturnOutcome::InvalidSignature => warn!("VNPAY return: invalid signature"),
        }

        outcome
    }
}
