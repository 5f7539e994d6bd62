//! HTTP access to the EventX API for the terminal client.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;
use auth::{AuthError, AuthResponse, Authenticator, Credentials, SIGNIN_PATH};
use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("the API rejected the session token")]
    Unauthorized,
    #[error("server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("http request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one bodiless request with an optional bearer token.
    ///
    /// # Errors
    ///
    /// `Unauthorized` for 401, `Status` for any other non-success code,
    /// `Decode` when a successful response is not JSON.
    pub async fn request(&self, method: reqwest::Method, path: &str, token: Option<&str>) -> Result<Value, HttpError> {
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self.client.request(method, &url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        parse_body(status, &text)
    }
}

/// Interpret a response. Empty successful bodies read as `null`.
fn parse_body(status: StatusCode, text: &str) -> Result<Value, HttpError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(HttpError::Unauthorized);
    }
    let parsed = if text.trim().is_empty() {
        Ok(Value::Null)
    } else {
        serde_json::from_str::<Value>(text)
    };
    if !status.is_success() {
        let message = parsed
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_owned))
            .unwrap_or_else(|| text.trim().to_owned());
        return Err(HttpError::Status {
            status: status.as_u16(),
            message,
        });
    }
    parsed.map_err(|e| HttpError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl Authenticator for ApiClient {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let response = self
            .client
            .post(self.url(SIGNIN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected(status.as_u16()));
        }
        response
            .json::<AuthResponse>()
            .await
            .map_err(|e| AuthError::Malformed(e.to_string()))
    }
}
