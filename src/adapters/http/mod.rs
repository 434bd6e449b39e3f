//! HTTP adapters - Axum handlers, DTOs and routing.
//!
//! - `payment` - payment URL creation, return/IPN callbacks, gateway query, bank list
//! - `orders` - order read endpoints
//! - `router` - composition with trace, CORS and timeout layers

pub mod error;
pub mod extract;
pub mod orders;
pub mod payment;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use extract::ClientIp;
pub use router::app_router;
pub use state::AppState;
