//! API error mapping.
//!
//! Every error leaving a JSON endpoint (except the IPN, which always
//! acknowledges) goes through [`ApiError`] so clients see one body shape.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

use crate::application::PaymentError;

/// Standard error body: `{"success": false, "code": "...", "message": "..."}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// HTTP-facing wrapper around [`PaymentError`].
#[derive(Debug)]
pub struct ApiError(pub PaymentError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PaymentError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            PaymentError::OrderNotFound(_) => StatusCode::NOT_FOUND,
            PaymentError::DuplicateReference(_) => StatusCode::CONFLICT,
            PaymentError::Gateway { .. } => StatusCode::BAD_GATEWAY,
            PaymentError::GatewayNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            PaymentError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(PaymentError::validation("body", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self.0, status = status.as_u16(), "Request failed");
        }

        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_follows_error_kind() {
        let cases = [
            (PaymentError::validation("amount", "Invalid amount"), 400),
            (PaymentError::order_not_found("ORD1"), 404),
            (PaymentError::DuplicateReference("ORD1".into()), 409),
            (
                PaymentError::Gateway {
                    reason: "timeout".into(),
                    retryable: true,
                },
                502,
            ),
            (PaymentError::GatewayNotConfigured, 503),
            (PaymentError::infrastructure("db down"), 500),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError(err).status().as_u16(), expected);
        }
    }

    #[test]
    fn error_body_hides_infrastructure_cause() {
        let body = ErrorResponse::new(
            PaymentError::infrastructure("connection refused").code().to_string(),
            PaymentError::infrastructure("connection refused").message(),
        );

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["message"], "Internal server error");
    }
}
