use crate::{ClientError, ClientResult, LoginResponse};

use fd_core::Identity;

use log::debug;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the FibroDetect REST API
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root including its prefix (e.g., "http://127.0.0.1:8000/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            client: ReqwestClient::new(),
        }
    }

    /// Attach a bearer token to every subsequent request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build a request with the bearer header when a token is held
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Build a request that requires a bearer token. Fails without touching
    /// the network when none is held.
    #[track_caller]
    pub(crate) fn authorized(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        if self.token.is_none() {
            return Err(ClientError::missing_token());
        }
        Ok(self.request(method, path))
    }

    /// Execute request and decode a JSON body
    pub(crate) async fn execute<T: DeserializeOwned>(&self, req: RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = Self::error_message(status, &body);
            debug!("Request rejected with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute request whose body is not needed
    pub(crate) async fn execute_empty(&self, req: RequestBuilder) -> ClientResult<()> {
        let response = req.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await?;
            let message = Self::error_message(status, &body);
            debug!("Request rejected with {status}: {message}");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(())
    }

    /// Pull the backend's message out of an error body.
    ///
    /// Understands `{"detail": "..."}`, `{"detail": [{"msg": ...}]}` and
    /// `{"error": {"message": "..."}}`; falls back to the status reason.
    fn error_message(status: StatusCode, body: &[u8]) -> String {
        let fallback = || {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        };

        let Ok(value) = serde_json::from_slice::<Value>(body) else {
            return fallback();
        };

        match value.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(|v| v.as_str()))
                    .collect();
                if !messages.is_empty() {
                    return messages.join("; ");
                }
            }
            _ => {}
        }

        value
            .get("error")
            .and_then(|error| error.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(fallback)
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a bearer token (form-encoded, OAuth2 password style)
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = self
            .request(Method::POST, "/auth/login")
            .form(&[("username", email), ("password", password)]);
        self.execute(req).await
    }

    /// Resolve a bearer token into the identity it belongs to
    pub async fn current_user(&self, token: &str) -> ClientResult<Identity> {
        let url = format!("{}/auth/me", self.base_url);
        let req = self.client.get(&url).bearer_auth(token);
        self.execute(req).await
    }
}
