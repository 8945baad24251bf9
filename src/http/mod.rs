//! HTTP client layer — `TerminalxHttp` with retry policies.

pub mod client;
pub mod retry;

pub use client::TerminalxHttp;
pub use retry::{RetryConfig, RetryPolicy};
