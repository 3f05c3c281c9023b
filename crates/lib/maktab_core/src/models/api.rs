//! Wire models for the backend API.

use serde::{Deserialize, Serialize};

/// Envelope the backend wraps every auth response in.
///
/// On a successful login `data` is the bearer token and `message` carries the
/// role identifier. That overloading is the backend's existing contract, kept
/// as-is here; new endpoints should not copy it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_success_envelope() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":true,"message":"ROLE_TEACHER","data":"tok"}"#)
                .expect("deserialize");
        assert!(response.success);
        assert_eq!(response.message, "ROLE_TEACHER");
        assert_eq!(response.data.as_deref(), Some("tok"));
    }

    #[test]
    fn deserializes_failure_envelope_without_data() {
        let response: LoginResponse =
            serde_json::from_str(r#"{"success":false,"message":"invalid credentials"}"#)
                .expect("deserialize");
        assert!(!response.success);
        assert_eq!(response.message, "invalid credentials");
        assert!(response.data.is_none());
    }
}
