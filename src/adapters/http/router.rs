//! Top-level router: mounts every endpoint group and the shared layers.

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::orders::order_routes;
use super::payment::payment_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// Builds the application router.
///
/// # Routes
/// - `{payment_route_prefix}/...` - payment endpoints (see [`payment_routes`])
/// - `/orders/...` - order read endpoints
/// - `/health` - liveness
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .nest(&server.payment_route_prefix, payment_routes())
        .nest("/orders", order_routes())
        .route("/health", get(health))
        .with_state(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.allowed_origins()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Permissive when no origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
