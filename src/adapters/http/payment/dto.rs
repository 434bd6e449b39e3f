//! Request and response DTOs for the payment endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreatePaymentUrlCommand, CreatePaymentUrlResult};
use crate::domain::vnpay::{describe, Bank, CallbackFields};
use crate::ports::TransactionQueryResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /create-payment-url`.
///
/// `orderId` and `amount` are taken as raw JSON so that a wrong type is
/// reported as a validation failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentUrlRequest {
    #[serde(default)]
    pub order_id: Option<Value>,
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub order_description: Option<String>,
    #[serde(default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub bank_code: Option<String>,
}

impl CreatePaymentUrlRequest {
    pub fn into_command(self, client_ip: String) -> CreatePaymentUrlCommand {
        let order_id = match self.order_id {
            Some(Value::String(id)) => id,
            Some(Value::Number(id)) => id.to_string(),
            _ => String::new(),
        };
        // Non-numeric amounts become NaN and fail amount validation.
        let amount = self
            .amount
            .as_ref()
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN);

        CreatePaymentUrlCommand {
            order_id,
            amount,
            order_description: self.order_description.unwrap_or_default(),
            order_type: self.order_type,
            locale: self.locale,
            bank_code: self.bank_code,
            client_ip,
        }
    }
}

/// Body of `POST /query-transaction`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTransactionRequest {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub trans_date: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentUrlResponse {
    pub success: bool,
    pub message: String,
    pub payment_url: String,
    /// Gateway reference actually sent as `vnp_TxnRef`.
    pub order_id: String,
    pub original_order_id: String,
}

impl From<CreatePaymentUrlResult> for CreatePaymentUrlResponse {
    fn from(result: CreatePaymentUrlResult) -> Self {
        Self {
            success: true,
            message: "Payment URL created successfully".to_string(),
            payment_url: result.payment_url,
            order_id: result.order_reference,
            original_order_id: result.original_order_id,
        }
    }
}

/// Body of the return endpoint. `data` is absent when the signature fails.
#[derive(Debug, Clone, Serialize)]
pub struct ReturnResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ReturnData>,
}

impl ReturnResponse {
    pub fn succeeded(fields: &CallbackFields) -> Self {
        Self {
            success: true,
            message: "Payment successful".to_string(),
            data: Some(ReturnData {
                transaction_no: fields.transaction_no.clone(),
                bank_code: fields.bank_code.clone(),
                pay_date: fields.pay_date.clone(),
                ..ReturnData::from_fields(fields)
            }),
        }
    }

    pub fn failed(fields: &CallbackFields) -> Self {
        Self {
            success: false,
            message: "Payment failed".to_string(),
            data: Some(ReturnData::from_fields(fields)),
        }
    }

    pub fn invalid_signature() -> Self {
        Self {
            success: false,
            message: "Invalid signature".to_string(),
            data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnData {
    pub order_id: String,
    /// Major currency units.
    pub amount: Option<f64>,
    pub order_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_date: Option<String>,
    pub response_code: String,
    pub description: String,
}

impl ReturnData {
    fn from_fields(fields: &CallbackFields) -> Self {
        Self {
            order_id: fields.order_reference.clone(),
            amount: fields.amount.map(|amount| amount.major()),
            order_info: fields.order_info.clone(),
            transaction_no: None,
            bank_code: None,
            pay_date: None,
            response_code: fields.response_code.clone(),
            description: describe(&fields.response_code).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryTransactionResponse {
    pub success: bool,
    /// The gateway's answer, passed through as received.
    pub data: TransactionQueryResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct BanksResponse {
    pub success: bool,
    pub banks: &'static [Bank],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vnpay::Amount;
    use serde_json::json;

    fn callback_fields(response_code: &str) -> CallbackFields {
        CallbackFields {
            order_reference: "ORD1231700000000000".to_string(),
            response_code: response_code.to_string(),
            transaction_status: Some(response_code.to_string()),
            amount: Amount::from_gateway_units(25_000_000),
            bank_code: Some("NCB".to_string()),
            bank_tran_no: Some("VNP14226112".to_string()),
            card_type: Some("ATM".to_string()),
            order_info: Some("Thanh toan don hang".to_string()),
            pay_date: Some("20240301120500".to_string()),
            transaction_no: Some("14226112".to_string()),
        }
    }

    #[test]
    fn request_accepts_numeric_order_id() {
        let request: CreatePaymentUrlRequest = serde_json::from_value(json!({
            "orderId": 123,
            "amount": 250000,
            "orderDescription": "Thanh toan"
        }))
        .unwrap();

        let cmd = request.into_command("127.0.0.1".to_string());

        assert_eq!(cmd.order_id, "123");
        assert_eq!(cmd.amount, 250_000.0);
        assert_eq!(cmd.client_ip, "127.0.0.1");
    }

    #[test]
    fn string_amount_becomes_invalid() {
        let request: CreatePaymentUrlRequest = serde_json::from_value(json!({
            "orderId": "ORD1",
            "amount": "250000",
            "orderDescription": "Thanh toan"
        }))
        .unwrap();

        assert!(request.into_command(String::new()).amount.is_nan());
    }

    #[test]
    fn successful_return_includes_transaction_data() {
        let json = serde_json::to_value(ReturnResponse::succeeded(&callback_fields("00"))).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Payment successful");
        assert_eq!(json["data"]["amount"], 250_000.0);
        assert_eq!(json["data"]["transactionNo"], "14226112");
        assert_eq!(json["data"]["description"], "Giao dịch thành công");
    }

    #[test]
    fn failed_return_omits_transaction_data() {
        let json = serde_json::to_value(ReturnResponse::failed(&callback_fields("24"))).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Payment failed");
        assert_eq!(json["data"]["responseCode"], "24");
        assert!(json["data"].get("transactionNo").is_none());
    }

    #[test]
    fn invalid_signature_has_no_data() {
        let json = serde_json::to_value(ReturnResponse::invalid_signature()).unwrap();

        assert_eq!(json, json!({"success": false, "message": "Invalid signature"}));
    }
}
