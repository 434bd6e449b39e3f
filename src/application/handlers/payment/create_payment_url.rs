//! CreatePaymentUrlHandler - Command handler for starting a VNPAY payment.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::application::PaymentError;
use crate::domain::order::Order;
use crate::domain::vnpay::{
    fold_description, sanitize_order_reference, Amount, PaymentRequest, PaymentUrlBuilder,
};
use crate::ports::OrderRepository;

/// Command to create a signed payment URL.
#[derive(Debug, Clone)]
pub struct CreatePaymentUrlCommand {
    /// Merchant order id as sent by the client; sanitized before use.
    pub order_id: String,
    /// Amount in major currency units.
    pub amount: f64,
    pub order_description: String,
    pub order_type: Option<String>,
    pub locale: Option<String>,
    pub bank_code: Option<String>,
    pub client_ip: String,
}

/// Result of successful payment URL creation.
#[derive(Debug, Clone)]
pub struct CreatePaymentUrlResult {
    pub payment_url: String,
    /// Gateway reference (`vnp_TxnRef`).
    pub order_reference: String,
    pub original_order_id: String,
    pub order: Order,
}

/// Handler for creating payment URLs.
///
/// Validates the caller's input, derives a unique gateway reference,
/// records a pending order and returns the URL the customer must be
/// redirected to.
pub struct CreatePaymentUrlHandler {
    builder: PaymentUrlBuilder,
    repository: Arc<dyn OrderRepository>,
}

impl CreatePaymentUrlHandler {
    pub fn new(builder: PaymentUrlBuilder, repository: Arc<dyn OrderRepository>) -> Self {
        Self {
            builder,
            repository,
        }
    }

    pub async fn handle(
        &self,
        cmd: CreatePaymentUrlCommand,
    ) -> Result<CreatePaymentUrlResult, PaymentError> {
        // 1. Validate input
        if cmd.order_id.trim().is_empty() {
            return Err(PaymentError::validation("orderId", "Order ID is required"));
        }
        let sanitized = sanitize_order_reference(&cmd.order_id);
        if sanitized.is_empty() {
            return Err(PaymentError::validation(
                "orderId",
                "Order ID must contain letters or digits",
            ));
        }

        let amount = Amount::from_decimal(cmd.amount)
            .ok_or_else(|| PaymentError::validation("amount", "Invalid amount"))?;

        if cmd.order_description.trim().is_empty() {
            return Err(PaymentError::validation(
                "orderDescription",
                "Order description is required",
            ));
        }
        let description = fold_description(&cmd.order_description);
        if description.is_empty() {
            return Err(PaymentError::validation(
                "orderDescription",
                "Order description must contain letters or digits",
            ));
        }

        if cmd.client_ip.trim().is_empty() {
            return Err(PaymentError::validation("clientIp", "Client IP is required"));
        }

        // 2. Gateway references must be unique per day; suffix with millis
        let reference = format!("{}{}", sanitized, Utc::now().timestamp_millis());

        // 3. Sign the URL
        let request = PaymentRequest::new(&reference, amount, &description, &cmd.client_ip)
            .with_order_type(cmd.order_type.as_deref())
            .with_locale(cmd.locale.as_deref())
            .with_bank_code(cmd.bank_code.as_deref());
        let payment_url = self.builder.build_payment_url(&request);

        // 4. Record the pending order so the IPN can find it
        let order = Order::create_pending(&reference, &cmd.order_id, amount, &description);
        self.repository.save(&order).await?;

        info!(
            order_reference = %reference,
            original_order_id = %cmd.order_id,
            amount = %amount,
            "VNPAY payment URL created"
        );

        Ok(CreatePaymentUrlResult {
            payment_url: payment_url.url,
            order_reference: reference,
            original_order_id: cmd.order_id,
            order,
        })
    }
}
