//! HTTP gateway.
//!
//! The configured client plus the single normalized error shape all backend
//! failures collapse into.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::{ApiError, NETWORK_ERROR_MESSAGE, SERVER_ERROR_FALLBACK};
