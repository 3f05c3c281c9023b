//! Auth service: sign-in/sign-out orchestration over the gateway and the
//! session store.
//!
//! The service owns no state of its own. Everything it reports is recomputed
//! from the session store on every call, so callers always see the current
//! persisted session and never a stale copy.

use std::sync::Arc;

use tracing::info;

use crate::api::ApiClient;
use crate::models::LoginResponse;
use crate::routes::{self, Navigator, Route};
use crate::session::SessionStore;

use super::claims::{self, TokenClaims};
use super::role::Role;
use super::{AuthError, Result};

/// Login endpoint, relative to the configured base URL.
const LOGIN_PATH: &str = "auth/login";

/// Fallback shown when the backend rejects a login without a message.
const LOGIN_FAILED_FALLBACK: &str = "Login failed";

/// Outcome of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Role string exactly as the backend issued it.
    pub role: String,
    /// Where the signed-in user should land.
    pub destination: Route,
}

/// Session state derived from the store at the moment of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    /// Raw role string as stored; may be a value outside the known set.
    pub role: Option<String>,
    pub is_authenticated: bool,
    pub is_token_expired: bool,
}

impl SessionSnapshot {
    /// The stored role parsed into the known role set, if it matches.
    pub fn known_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_wire)
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Orchestrates login, logout, and session-derived queries.
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl AuthService {
    pub fn new(api: ApiClient, store: SessionStore, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            api,
            store,
            navigator,
        }
    }

    /// Submit credentials and persist the resulting session.
    ///
    /// The backend takes `phone` and `password` as query parameters on a
    /// `POST` and answers with its usual envelope, where `data` carries the
    /// bearer token and `message` carries the role. Both quirks are the
    /// established wire contract and are accepted as-is.
    ///
    /// Field presence and phone shape are the caller's job; the sign-in flow
    /// guards before calling here and nothing is re-validated at this layer.
    pub async fn login(&self, phone: &str, password: &str) -> Result<LoginSuccess> {
        let response: LoginResponse = self
            .api
            .post_with_query(LOGIN_PATH, &[("phone", phone), ("password", password)])
            .await?;

        let token = match response.data {
            Some(ref token) if response.success && !token.is_empty() => token,
            // HTTP-level success but the backend said no; its message is the
            // user-facing explanation.
            _ => {
                let message = if response.message.is_empty() {
                    LOGIN_FAILED_FALLBACK.to_string()
                } else {
                    response.message
                };
                return Err(AuthError::LoginRejected(message));
            }
        };

        self.store.set(token, &response.message)?;
        info!(role = %response.message, "signed in");

        Ok(LoginSuccess {
            destination: routes::destination_for(Some(&response.message)),
            role: response.message,
        })
    }

    /// Clear the session and send the UI back to the sign-in screen.
    ///
    /// Safe to call with no session present; clearing an empty store is a
    /// no-op.
    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        self.navigator.hard_redirect(Route::SignIn);
        info!("signed out, session cleared");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Derived queries, recomputed from the store on every call
    // -----------------------------------------------------------------------

    /// A token is stored and has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.store
            .token()
            .is_some_and(|token| !claims::is_expired(&token))
    }

    /// The stored role, when it parses into the known set.
    pub fn role(&self) -> Option<Role> {
        self.store.role().as_deref().and_then(Role::from_wire)
    }

    /// Whether the stored token should be treated as expired. True when no
    /// token is stored at all.
    pub fn is_token_expired(&self) -> bool {
        match self.store.token() {
            Some(token) => claims::is_expired(&token),
            None => true,
        }
    }

    /// Claims payload of the stored token, when one is stored and decodes.
    pub fn claims(&self) -> Option<TokenClaims> {
        self.store.token().and_then(|token| claims::decode(&token))
    }

    /// Full derived view of the current session.
    pub fn session(&self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.store.token(),
            role: self.store.role(),
            is_authenticated: self.is_authenticated(),
            is_token_expired: self.is_token_expired(),
        }
    }
}
