//! VNPAY payment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    BanksResponse, CreatePaymentUrlRequest, CreatePaymentUrlResponse, QueryTransactionRequest,
    QueryTransactionResponse, ReturnData, ReturnResponse,
};
pub use routes::payment_routes;
