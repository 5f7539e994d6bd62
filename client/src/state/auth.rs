//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthContext` is provided once at the app root and injected wherever a
//! view needs the session. It wraps the `auth` session store in a signal;
//! the store is only changed through sign-in, sign-out, and token expiry.
//! Views read immutable `Session` snapshots through a memo, so unrelated
//! store bookkeeping never wakes them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{Authenticator, Credentials, Decision, Session, SessionStore, SignInError, Tier};
use leptos::prelude::*;

use crate::net::api::{ApiError, HttpAuthenticator};
use crate::util::storage::BrowserStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<SessionStore<BrowserStorage>>,
    session: Memo<Session>,
}

impl AuthContext {
    /// Restore the session from `localStorage` and provide it as context.
    pub fn provide() -> Self {
        let store = RwSignal::new(SessionStore::initialize(BrowserStorage));
        let session = Memo::new(move |_| store.with(|s| s.session().clone()));
        let ctx = Self { store, session };
        provide_context(ctx);
        ctx
    }

    /// Current session snapshot (tracked).
    pub fn session(self) -> Session {
        self.session.get()
    }

    /// Bearer token for a view requiring `tier` (tracked). `None` until the
    /// route guard lets that view render.
    pub fn token_for(self, tier: Tier) -> Option<String> {
        self.session.with(|s| auth::authorized_token(s, tier).map(str::to_owned))
    }

    /// Current bearer token for use inside event handlers (untracked).
    pub fn token_untracked(self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    /// Route guard decision for `tier` (tracked).
    pub fn decide(self, tier: Tier) -> Decision {
        self.session.with(|s| auth::decide(s, tier))
    }

    /// Sign in against the EventX API.
    ///
    /// The store is not borrowed while the request is in flight; a response
    /// that resolves after a newer sign-in or a sign-out is discarded.
    ///
    /// # Errors
    ///
    /// See [`SignInError`]. The session is unchanged on error.
    pub async fn sign_in(self, credentials: Credentials) -> Result<Session, SignInError> {
        let attempt = self
            .store
            .try_update(SessionStore::begin_sign_in)
            .unwrap_or(Err(SignInError::Superseded))?;
        let outcome = HttpAuthenticator.authenticate(&credentials).await;
        self.store
            .try_update(move |s| s.complete_sign_in(attempt, outcome))
            .unwrap_or(Err(SignInError::Superseded))
    }

    pub fn sign_out(self) {
        self.store.update(SessionStore::sign_out);
    }

    /// Pass an API result through, forcing sign-out when the endpoint
    /// rejected `token` as unauthorized.
    pub fn observe<T>(self, token: &str, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if matches!(result, Err(ApiError::Unauthorized)) {
            let expired = self.store.try_update(|s| s.expire(token)).unwrap_or(false);
            if expired {
                leptos::logging::warn!("API rejected the session token; signed out");
            }
        }
        result
    }
}

/// Fetch the `AuthContext` provided by the app root.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// User-facing message for a failed sign-in, or `None` when nothing should be shown.
pub fn sign_in_error_message(err: SignInError) -> Option<String> {
    match err {
        SignInError::Superseded | SignInError::AlreadySignedIn => None,
        SignInError::AuthenticationFailed | SignInError::StorageUnavailable => Some(err.to_string()),
    }
}

/// Validate raw form input before any network call.
///
/// # Errors
///
/// Returns a message when either field is blank.
pub fn credentials_from_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok(Credentials::new(email, password))
}
