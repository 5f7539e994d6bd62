//! REST API helpers for communicating with the EventX API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every request reports `ApiError::Unavailable`,
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. A 401 is surfaced as
//! `ApiError::Unauthorized` so `AuthContext::observe` can apply the forced
//! sign-out policy; every other failure is just a message for the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use auth::{AuthError, AuthResponse, Authenticator, Credentials};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{Analytics, AnalyticsEnvelope, Event, Ticket};
use crate::state::event_form::EventDraft;

const EVENTS_PATH: &str = "/admin/event/all";
const CREATE_EVENT_PATH: &str = "/admin/event/add";
const TICKETS_PATH: &str = "/user/ticket";
const ANALYTICS_PATH: &str = "/admin/analytics";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API rejected the bearer token.
    #[error("your session has expired; please sign in again")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("the analytics service reported a failure")]
    Rejected,
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "csr"))]
fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        other => Err(ApiError::Status(other)),
    }
}

fn event_path(id: &str) -> String {
    format!("/admin/event/{id}")
}

fn update_event_path(id: &str) -> String {
    format!("/admin/event/update/{id}")
}

fn allocate_path(event_id: &str) -> String {
    format!("/admin/allocate/{event_id}")
}

fn buy_path(event_id: &str) -> String {
    format!("/user/event/buy/{event_id}")
}

#[cfg(feature = "csr")]
async fn get_json<T: DeserializeOwned>(token: &str, path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&crate::config::endpoint(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    classify_status(resp.status())?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn get_json<T: DeserializeOwned>(token: &str, path: &str) -> Result<T, ApiError> {
    let _ = (token, path);
    Err(ApiError::Unavailable)
}

#[cfg(feature = "csr")]
async fn post_json<B: Serialize>(token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    let resp = gloo_net::http::Request::post(&crate::config::endpoint(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    classify_status(resp.status())
}

#[cfg(not(feature = "csr"))]
async fn post_json<B: Serialize>(token: &str, path: &str, body: &B) -> Result<(), ApiError> {
    let _ = (token, path, body);
    Err(ApiError::Unavailable)
}

/// Fetch every event from `GET /admin/event/all`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_events(token: &str) -> Result<Vec<Event>, ApiError> {
    get_json(token, EVENTS_PATH).await
}

/// Fetch one event from `GET /admin/event/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_event(token: &str, id: &str) -> Result<Event, ApiError> {
    get_json(token, &event_path(id)).await
}

/// Create an event via `POST /admin/event/add`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_event(token: &str, draft: &EventDraft) -> Result<(), ApiError> {
    post_json(token, CREATE_EVENT_PATH, draft).await
}

/// Replace an event via `POST /admin/event/update/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_event(token: &str, id: &str, draft: &EventDraft) -> Result<(), ApiError> {
    post_json(token, &update_event_path(id), draft).await
}

#[derive(Serialize)]
struct AllocateRequest<'a> {
    #[serde(rename = "userId")]
    user_id: &'a str,
}

/// Allocate a ticket for `event_id` to `user_id` via `POST /admin/allocate/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn allocate_ticket(token: &str, event_id: &str, user_id: &str) -> Result<(), ApiError> {
    post_json(token, &allocate_path(event_id), &AllocateRequest { user_id }).await
}

/// Buy a ticket for the signed-in user via `POST /user/event/buy/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn buy_ticket(token: &str, event_id: &str) -> Result<(), ApiError> {
    post_json(token, &buy_path(event_id), &serde_json::json!({})).await
}

/// Fetch the signed-in user's tickets from `GET /user/ticket`.
///
/// # Errors
///
/// Returns an error if the request fails or the body does not decode.
pub async fn fetch_tickets(token: &str) -> Result<Vec<Ticket>, ApiError> {
    get_json(token, TICKETS_PATH).await
}

/// Fetch the admin dashboard numbers from `GET /admin/analytics`.
///
/// # Errors
///
/// Returns an error if the request fails, the body does not decode, or the
/// envelope reports `success: false`.
pub async fn fetch_analytics(token: &str) -> Result<Analytics, ApiError> {
    let envelope: AnalyticsEnvelope = get_json(token, ANALYTICS_PATH).await?;
    unwrap_analytics(envelope)
}

fn unwrap_analytics(envelope: AnalyticsEnvelope) -> Result<Analytics, ApiError> {
    match envelope {
        AnalyticsEnvelope {
            success: true,
            data: Some(data),
        } => Ok(data),
        _ => Err(ApiError::Rejected),
    }
}

/// Sign-in transport for the session store: `POST /user/signin`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthenticator;

#[async_trait(?Send)]
impl Authenticator for HttpAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&crate::config::endpoint(auth::SIGNIN_PATH))
                .json(credentials)
                .map_err(|e| AuthError::Malformed(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(AuthError::Rejected(resp.status()));
            }
            resp.json::<AuthResponse>()
                .await
                .map_err(|e| AuthError::Malformed(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(AuthError::Transport("not available outside the browser".to_owned()))
        }
    }
}
