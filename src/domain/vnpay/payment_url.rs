//! Outbound payment-initiation URLs.

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use unicode_normalization::UnicodeNormalization;

use super::amount::Amount;
use super::credentials::GatewayCredentials;
use super::fields;
use super::params::ParameterSet;
use super::signature::SignedPayload;

/// Validated inputs for one payment-initiation redirect.
///
/// `order_reference` and `description` are taken as given; run them
/// through [`sanitize_order_reference`] and [`fold_description`] first.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub order_reference: String,
    pub amount: Amount,
    pub description: String,
    pub order_type: String,
    pub locale: String,
    pub client_ip: String,
    pub bank_code: Option<String>,
}

impl PaymentRequest {
    pub fn new(
        order_reference: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> Self {
        Self {
            order_reference: order_reference.into(),
            amount,
            description: description.into(),
            order_type: fields::DEFAULT_ORDER_TYPE.to_string(),
            locale: fields::DEFAULT_LOCALE.to_string(),
            client_ip: client_ip.into(),
            bank_code: None,
        }
    }

    /// Overrides the order type; blank values keep the default.
    pub fn with_order_type(mut self, order_type: Option<&str>) -> Self {
        if let Some(value) = non_blank(order_type) {
            self.order_type = value.to_string();
        }
        self
    }

    /// Overrides the locale; blank values keep the default.
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        if let Some(value) = non_blank(locale) {
            self.locale = value.to_string();
        }
        self
    }

    pub fn with_bank_code(mut self, bank_code: Option<&str>) -> Self {
        self.bank_code = non_blank(bank_code).map(str::to_string);
        self
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A signed payment URL and the payload it was built from.
#[derive(Debug, Clone)]
pub struct PaymentUrl {
    pub url: String,
    pub payload: SignedPayload,
}

/// Builds signed redirect URLs against the gateway's payment page.
#[derive(Debug, Clone)]
pub struct PaymentUrlBuilder {
    credentials: Arc<GatewayCredentials>,
}

impl PaymentUrlBuilder {
    pub fn new(credentials: Arc<GatewayCredentials>) -> Self {
        Self { credentials }
    }

    /// Builds the URL stamped with the current local time.
    pub fn build_payment_url(&self, request: &PaymentRequest) -> PaymentUrl {
        self.build_payment_url_at(request, Local::now().naive_local())
    }

    /// Builds the URL with an explicit `vnp_CreateDate`.
    pub fn build_payment_url_at(
        &self,
        request: &PaymentRequest,
        created_at: NaiveDateTime,
    ) -> PaymentUrl {
        let creds = &self.credentials;

        let params = ParameterSet::new()
            .with(fields::VERSION, fields::PROTOCOL_VERSION)
            .with(fields::COMMAND, fields::COMMAND_PAY)
            .with(fields::TMN_CODE, creds.tmn_code())
            .with(fields::LOCALE, &request.locale)
            .with(fields::CURR_CODE, fields::CURRENCY_VND)
            .with(fields::TXN_REF, &request.order_reference)
            .with(fields::ORDER_INFO, &request.description)
            .with(fields::ORDER_TYPE, &request.order_type)
            .with(fields::AMOUNT, request.amount.gateway_units())
            .with(fields::RETURN_URL, creds.return_url())
            .with(fields::IP_ADDR, &request.client_ip)
            .with(
                fields::CREATE_DATE,
                created_at.format(fields::TIMESTAMP_FORMAT),
            )
            .with_optional(fields::BANK_CODE, request.bank_code.as_deref());

        let payload = creds.signer().sign_parameters(params);
        let url = format!("{}?{}", creds.payment_url(), payload.to_query_string());

        PaymentUrl { url, payload }
    }
}

/// Strips everything but ASCII letters and digits from an order reference.
pub fn sanitize_order_reference(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Folds Vietnamese diacritics to base Latin letters and drops punctuation.
///
/// `"Thanh toán đơn hàng!"` becomes `"Thanh toan don hang"`. Whitespace is
/// kept and the result is trimmed.
pub fn fold_description(raw: &str) -> String {
    let folded: String = raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| match c {
            'đ' => 'd',
            'Đ' => 'D',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();

    folded.trim().to_string()
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use secrecy::SecretString;

    const PAYMENT_URL: &str = "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html";

    fn credentials() -> Arc<GatewayCredentials> {
        Arc::new(
            GatewayCredentials::new(
                "TESTTMN1",
                &SecretString::new("TESTSECRET".to_string()),
                PAYMENT_URL,
                "http://localhost:8000/vnpay/return",
                "http://localhost:8000/vnpay/ipn",
            )
            .unwrap(),
        )
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 2)
            .unwrap()
    }

    fn request() -> PaymentRequest {
        PaymentRequest::new(
            "ORD123",
            Amount::from_major(250_000).unwrap(),
            "Thanh toan don hang",
            "127.0.0.1",
        )
    }

    // ══════════════════════════════════════════════════════════════
    // Sanitization Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn reference_keeps_only_alphanumerics() {
        assert_eq!(sanitize_order_reference("ORD 123!"), "ORD123");
        assert_eq!(sanitize_order_reference("a-b_c.d/1"), "abcd1");
        assert_eq!(sanitize_order_reference("đơn1"), "n1");
    }

    #[test]
    fn description_folds_vietnamese() {
        assert_eq!(fold_description("Thanh toán đơn hàng"), "Thanh toan don hang");
        assert_eq!(fold_description("ĐẶT HÀNG #42!"), "DAT HANG 42");
        assert_eq!(fold_description("  Phở bò  "), "Pho bo");
    }

    #[test]
    fn description_of_only_punctuation_is_empty() {
        assert_eq!(fold_description("!!! ???"), "");
    }

    // ══════════════════════════════════════════════════════════════
    // Request Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn request_defaults() {
        let req = request();
        assert_eq!(req.order_type, "other");
        assert_eq!(req.locale, "vn");
        assert_eq!(req.bank_code, None);
    }

    #[test]
    fn blank_overrides_keep_defaults() {
        let req = request()
            .with_order_type(Some(" "))
            .with_locale(None)
            .with_bank_code(Some(""));

        assert_eq!(req.order_type, "other");
        assert_eq!(req.locale, "vn");
        assert_eq!(req.bank_code, None);
    }

    // ══════════════════════════════════════════════════════════════
    // URL Construction Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn url_targets_gateway_with_all_fields() {
        let built = PaymentUrlBuilder::new(credentials()).build_payment_url_at(&request(), fixed_time());

        assert!(built.url.starts_with(&format!("{}?", PAYMENT_URL)));
        assert!(built.url.contains("vnp_Amount=25000000"));
        assert!(built.url.contains("vnp_Command=pay"));
        assert!(built.url.contains("vnp_CreateDate=20240305090702"));
        assert!(built.url.contains("vnp_CurrCode=VND"));
        assert!(built.url.contains("vnp_Locale=vn"));
        assert!(built.url.contains("vnp_OrderInfo=Thanh+toan+don+hang"));
        assert!(built.url.contains("vnp_OrderType=other"));
        assert!(built.url.contains("vnp_TmnCode=TESTTMN1"));
        assert!(built.url.contains("vnp_TxnRef=ORD123"));
        assert!(built.url.contains("vnp_Version=2.1.0"));
        assert!(built
            .url
            .contains("vnp_ReturnUrl=http%3A%2F%2Flocalhost%3A8000%2Fvnpay%2Freturn"));
        assert!(!built.url.contains("vnp_BankCode"));
    }

    #[test]
    fn url_ends_with_secure_hash() {
        let built = PaymentUrlBuilder::new(credentials()).build_payment_url_at(&request(), fixed_time());

        let expected_suffix = format!("&vnp_SecureHash={}", built.payload.secure_hash());
        assert!(built.url.ends_with(&expected_suffix));
    }

    #[test]
    fn bank_code_is_included_when_present() {
        let req = request().with_bank_code(Some("NCB"));
        let built = PaymentUrlBuilder::new(credentials()).build_payment_url_at(&req, fixed_time());

        assert!(built.url.contains("vnp_BankCode=NCB"));
    }

    #[test]
    fn signature_verifies_against_canonical_form() {
        let creds = credentials();
        let built = PaymentUrlBuilder::new(creds.clone()).build_payment_url_at(&request(), fixed_time());

        assert!(creds
            .signer()
            .verify(built.payload.canonical(), built.payload.secure_hash()));
    }

    #[test]
    fn same_inputs_same_url() {
        let builder = PaymentUrlBuilder::new(credentials());
        let a = builder.build_payment_url_at(&request(), fixed_time());
        let b = builder.build_payment_url_at(&request(), fixed_time());

        assert_eq!(a.url, b.url);
    }
}
