//! Sign-in flow: input guards in front of the auth service, plus the
//! submission state a form control would render from.

use std::sync::Arc;

use maktab_core::auth::{AuthService, LoginSuccess};
use maktab_core::routes::Navigator;

/// Shown when either credential field is empty.
pub const MISSING_FIELDS_MESSAGE: &str = "Please enter your phone number and password.";

/// Shown when the phone number does not carry the country prefix.
pub const PHONE_PREFIX_MESSAGE: &str = "Phone number must start with 998.";

/// Where the flow currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Submitting,
    Error(String),
    Success(LoginSuccess),
}

/// What a single submit attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Input rejected before any network call; the flow stays idle.
    Invalid(String),
    /// A submission is already in flight; this one was ignored.
    Blocked,
    /// Signed in; the flow has already navigated to the destination.
    Success(LoginSuccess),
    /// The auth service rejected the attempt; the flow is ready to retry.
    Failed(String),
}

/// Drives one sign-in form.
pub struct SignInFlow {
    service: AuthService,
    navigator: Arc<dyn Navigator>,
    state: FlowState,
}

impl SignInFlow {
    pub fn new(service: AuthService, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            service,
            navigator,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// True while a submission is in flight. The submit control stays
    /// disabled for as long as this holds; nothing aborts the in-flight call.
    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    /// Shape checks that run before any network call. Returns the phone with
    /// every plus sign stripped, ready for the wire.
    pub fn validate(phone: &str, password: &str) -> Result<String, String> {
        if phone.is_empty() || password.is_empty() {
            return Err(MISSING_FIELDS_MESSAGE.to_string());
        }
        if !phone.starts_with("998") && !phone.starts_with("+998") {
            return Err(PHONE_PREFIX_MESSAGE.to_string());
        }
        Ok(phone.replace('+', ""))
    }

    /// One submit attempt: guard, call the auth service, navigate on success.
    ///
    /// There is no retry at this layer; whatever happened, the next attempt
    /// is the user's move.
    pub async fn submit(&mut self, phone: &str, password: &str) -> SubmitResult {
        if self.is_submitting() {
            return SubmitResult::Blocked;
        }

        let cleaned = match Self::validate(phone, password) {
            Ok(cleaned) => cleaned,
            Err(message) => {
                // Guard failure keeps the flow idle; nothing went out.
                return SubmitResult::Invalid(message);
            }
        };

        self.state = FlowState::Submitting;
        match self.service.login(&cleaned, password).await {
            Ok(success) => {
                self.navigator.replace(success.destination);
                self.state = FlowState::Success(success.clone());
                SubmitResult::Success(success)
            }
            Err(e) => {
                let message = e.to_string();
                self.state = FlowState::Error(message.clone());
                SubmitResult::Failed(message)
            }
        }
    }
}
