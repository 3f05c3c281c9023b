//! Bearer token claims inspection.
//!
//! The backend issues tokens as three dot-separated base64url segments with a
//! JSON claims payload in the middle. This module reads that payload without
//! verifying the signature: the token came from the backend over the login
//! call and is trusted at face value. Nothing here is authentication.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

/// Claims carried in a bearer token payload.
///
/// Known fields are typed; everything else the backend puts in the payload is
/// kept in `extra` so callers can still see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Phone number the token was issued for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Role string as issued, not validated against the known role set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Issued-at, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry, epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Remaining payload fields, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenClaims {
    /// The role claim parsed into the known role set, if it matches.
    pub fn known_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::from_wire)
    }

    /// Expiry as a UTC timestamp, if the claim is present and in range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Issued-at as a UTC timestamp, if the claim is present and in range.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

/// Decode the claims payload of `token`.
///
/// Returns `None` when the token does not have exactly three dot-separated
/// segments, or when the middle segment is not base64url, not UTF-8, or not
/// a JSON object. Decode failures never escape as errors.
pub fn decode(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
    serde_json::from_slice(&payload).ok()
}

/// Whether `token` should be treated as expired.
///
/// True when the token cannot be decoded, carries no `exp` claim, or its
/// expiry (seconds, widened to milliseconds) is before the current wall-clock
/// time. An unreadable token is deliberately reported as expired rather than
/// as an error.
pub fn is_expired(token: &str) -> bool {
    let Some(exp) = decode(token).and_then(|claims| claims.exp) else {
        return true;
    };
    exp.saturating_mul(1000) < Utc::now().timestamp_millis()
}
