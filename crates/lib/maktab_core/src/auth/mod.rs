//! Authentication logic.
//!
//! Provides role parsing, token claims inspection, and the auth service
//! that drives sign-in and sign-out against the backend.

pub mod claims;
pub mod role;
pub mod service;

pub use claims::TokenClaims;
pub use role::Role;
pub use service::{AuthService, LoginSuccess, SessionSnapshot};

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend answered the login call but said no. Carries the
    /// backend's own message, which is what the user should see.
    #[error("{0}")]
    LoginRejected(String),

    #[error(transparent)]
    Api(#[from] crate::api::ApiError),

    #[error(transparent)]
    Session(#[from] crate::session::SessionError),
}

/// Result type for authentication operations.
pub type Result<T> = std::result::Result<T, AuthError>;
