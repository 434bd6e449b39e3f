//! VNPAY Gateway - merchant backend for the VNPAY payment gateway
//!
//! Builds HMAC-SHA512 signed payment URLs, verifies the gateway's return
//! and IPN callbacks, tracks order payment status and queries transaction
//! state through the gateway's API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
