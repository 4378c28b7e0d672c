//! HTTP client layer — `FoodflashHttp` with per-endpoint retry policies.

pub mod client;
pub mod retry;

pub use client::FoodflashHttp;
pub use retry::{RetryConfig, RetryPolicy};
