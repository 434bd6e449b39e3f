//! Request extractors.

use std::net::SocketAddr;

use async_trait::async_trait;
use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;
use axum::http::HeaderMap;

use super::error::ApiError;
use crate::application::PaymentError;

const FORWARDED_FOR: &str = "x-forwarded-for";

/// Caller IP as reported to the gateway in `vnp_IpAddr`.
///
/// Uses the first `X-Forwarded-For` entry when behind a proxy, otherwise
/// the socket peer address. The server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()` for the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIp(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ip) = forwarded_for(&parts.headers) {
            return Ok(ClientIp(ip));
        }

        parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| ClientIp(addr.ip().to_string()))
            .ok_or_else(|| {
                ApiError(PaymentError::validation(
                    "clientIp",
                    "Unable to determine client IP",
                ))
            })
    }
}

fn forwarded_for(headers: &HeaderMap) -> Option<String> {
    headers
        .get(FORWARDED_FOR)?
        .to_str()
        .ok()?
        .split(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<ClientIp, ApiError> {
        let (mut parts, _) = request.into_parts();
        ClientIp::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn takes_first_forwarded_entry() {
        let request = Request::builder()
            .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
            .body(())
            .unwrap();

        let ip = extract(request).await.unwrap();

        assert_eq!(ip, ClientIp("203.0.113.7".to_string()));
    }

    #[tokio::test]
    async fn falls_back_to_peer_address() {
        let mut request = Request::builder().body(()).unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([192, 168, 1, 20], 54321))));

        let ip = extract(request).await.unwrap();

        assert_eq!(ip.0, "192.168.1.20");
    }

    #[tokio::test]
    async fn blank_header_falls_back_to_peer_address() {
        let mut request = Request::builder()
            .header("X-Forwarded-For", " , ")
            .body(())
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 8080))));

        let ip = extract(request).await.unwrap();

        assert_eq!(ip.0, "127.0.0.1");
    }

    #[tokio::test]
    async fn rejects_when_no_source_is_available() {
        let request = Request::builder().body(()).unwrap();

        let err = extract(request).await.unwrap_err();

        assert_eq!(err.status().as_u16(), 400);
    }
}
