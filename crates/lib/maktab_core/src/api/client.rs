//! HTTP gateway to the Maktab backend.
//!
//! One configured client carries every request. Two cross-cutting behaviors
//! live here and nowhere else: outgoing requests pick up the stored bearer
//! token, and an unauthorized response force-closes the session and sends the
//! UI back to the sign-in screen.

use std::sync::Arc;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::AppConfig;
use crate::routes::{Navigator, Route};
use crate::session::SessionStore;

use super::error::ApiError;

/// Shared HTTP client for the backend API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
    store: SessionStore,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Build the gateway from configuration.
    ///
    /// `store` is read on every outgoing request and cleared on forced
    /// sign-out; `navigator` performs the redirect when that happens.
    pub fn new(
        config: &AppConfig,
        store: SessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(&config.api_base_url).map_err(|e| ApiError::request(e.to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(|e| ApiError::request(e.to_string()))?;
        Ok(Self {
            base_url,
            http,
            store,
            navigator,
        })
    }

    /// `GET` a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.join(path)?;
        debug!(%url, "GET");
        self.execute(self.http.get(url)).await
    }

    /// `POST` with query-string parameters and decode the JSON response.
    ///
    /// The backend's login endpoint takes its parameters this way; see
    /// [`crate::auth::AuthService::login`].
    pub async fn post_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.join(path)?;
        debug!(%url, "POST");
        self.execute(self.http.post(url).query(query)).await
    }

    fn join(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::request(e.to_string()))
    }

    /// Outgoing hook: attach the stored bearer token when one exists.
    fn attach_bearer(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.store.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send the request and normalize every failure into [`ApiError`].
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .attach_bearer(request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::request(e.to_string()));
        }

        let message = server_message(response).await;
        if status == StatusCode::UNAUTHORIZED {
            self.force_sign_out();
        }
        Err(ApiError::from_status(status.as_u16(), message))
    }

    /// Incoming hook for unauthorized responses: drop the session and send
    /// the UI back to sign-in. Skipped when already there, so an unauthorized
    /// reply to the login call itself cannot redirect in a loop.
    fn force_sign_out(&self) {
        if self.navigator.current() == Route::SignIn {
            return;
        }
        warn!("unauthorized response, closing session");
        if let Err(e) = self.store.clear() {
            warn!("failed to clear session: {e}");
        }
        self.navigator.hard_redirect(Route::SignIn);
    }
}

/// Map a send failure onto the normalized shape. A request that never became
/// sendable keeps its own message; anything that went out without an answer
/// becomes the fixed network message.
fn classify_send_error(e: reqwest::Error) -> ApiError {
    if e.is_builder() {
        ApiError::request(e.to_string())
    } else {
        ApiError::network()
    }
}

/// Pull the server's own `message` field out of an error body, if there is
/// one and it parses.
async fn server_message(response: reqwest::Response) -> Option<String> {
    let body = response.text().await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedNavigator(Route);

    impl Navigator for FixedNavigator {
        fn current(&self) -> Route {
            self.0
        }
        fn replace(&self, _route: Route) {}
        fn hard_redirect(&self, _route: Route) {}
    }

    fn config_with_base(base: &str) -> AppConfig {
        AppConfig {
            api_base_url: base.to_string(),
            http_timeout: std::time::Duration::from_secs(1),
            data_dir: std::env::temp_dir(),
        }
    }

    fn client_with_base(base: &str) -> Result<ApiClient, ApiError> {
        let dir = tempfile::tempdir().expect("tempdir");
        ApiClient::new(
            &config_with_base(base),
            SessionStore::open(dir.path()),
            Arc::new(FixedNavigator(Route::SignIn)),
        )
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = client_with_base("not a url").err().expect("must fail");
        assert_eq!(err.status, 0);
        assert!(!err.success);
    }

    #[test]
    fn joins_paths_against_the_base() {
        let client = client_with_base("http://127.0.0.1:9/api/").expect("client");
        let url = client.join("auth/login").expect("join");
        assert_eq!(url.as_str(), "http://127.0.0.1:9/api/auth/login");
    }
}
