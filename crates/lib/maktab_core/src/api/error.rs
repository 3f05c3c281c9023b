//! Normalized gateway errors.

use serde::Serialize;
use thiserror::Error;

/// Message used when a request went out but no response came back.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error: could not reach the server. Please check your connection.";

/// Fallback message when the server replied with an error status but no
/// usable message of its own.
pub const SERVER_ERROR_FALLBACK: &str = "Server error";

/// The single error shape every failed gateway call produces.
///
/// Server rejections, transport failures, and malformed requests all collapse
/// into this, so callers need exactly one handling path. `status` is the HTTP
/// status for server rejections and `0` when no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description, preferring the server's own message.
    pub message: String,
    /// HTTP status code, or 0 when the failure happened before a response.
    pub status: u16,
    /// Always `false`; kept so the serialized shape mirrors the backend's
    /// response envelope.
    pub success: bool,
}

impl ApiError {
    /// A server rejection. Empty or absent server messages fall back to
    /// [`SERVER_ERROR_FALLBACK`].
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        Self {
            message,
            status,
            success: false,
        }
    }

    /// A request that went out but got no response.
    pub fn network() -> Self {
        Self {
            message: NETWORK_ERROR_MESSAGE.to_string(),
            status: 0,
            success: false,
        }
    }

    /// A request that could not be constructed or sent at all.
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 0,
            success: false,
        }
    }

    /// Whether this error is the unauthorized status.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}
