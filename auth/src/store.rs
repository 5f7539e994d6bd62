//! Session store: the single source of truth for the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Seeded once from durable storage, then changed only by sign-in, sign-out,
//! and forced expiry. Every change writes durable storage in the same call so
//! a reload reproduces the in-memory session.
//!
//! CONCURRENCY
//! ===========
//! Sign-in suspends on the network. Callers that cannot hold `&mut` across
//! the await (reactive UI state) use `begin_sign_in` / `complete_sign_in`
//! directly. Each attempt carries a sequence number; a completion older than
//! the last committed transition is discarded, so a session never mixes two
//! responses and a sign-out is never undone by a late response.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::authenticator::{AuthResponse, Authenticator, Credentials};
use crate::error::{AuthError, SignInError};
use crate::guard::{self, Decision, Tier};
use crate::session::{Role, Session};
use crate::storage::{ROLE_KEY, Storage, TOKEN_KEY};

/// Ticket for an in-flight sign-in, returned by [`SessionStore::begin_sign_in`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignInAttempt {
    seq: u64,
}

#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Session,
    issued: u64,
    committed: u64,
}

impl<S: Storage> SessionStore<S> {
    /// Restore the session from `storage`. Never fails: unreadable storage
    /// yields the logged-out session.
    pub fn initialize(storage: S) -> Self {
        let session = restore(&storage);
        tracing::debug!(state = session.access().label(), "session restored");
        Self {
            storage,
            session,
            issued: 0,
            committed: 0,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Route guard decision for the current session.
    #[must_use]
    pub fn decide(&self, tier: Tier) -> Decision {
        guard::decide(&self.session, tier)
    }

    /// Reserve a sequence number for a sign-in about to hit the network.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError::AlreadySignedIn`] when a session is active.
    pub fn begin_sign_in(&mut self) -> Result<SignInAttempt, SignInError> {
        if self.session.is_logged_in() {
            return Err(SignInError::AlreadySignedIn);
        }
        self.issued += 1;
        Ok(SignInAttempt { seq: self.issued })
    }

    /// Apply the result of the authentication call for `attempt`.
    ///
    /// # Errors
    ///
    /// - [`SignInError::Superseded`] when a newer transition already committed.
    /// - [`SignInError::AuthenticationFailed`] for any endpoint failure or an empty token.
    /// - [`SignInError::StorageUnavailable`] when the session cannot be persisted.
    ///
    /// The session is unchanged in every error case.
    pub fn complete_sign_in(
        &mut self,
        attempt: SignInAttempt,
        outcome: Result<AuthResponse, AuthError>,
    ) -> Result<Session, SignInError> {
        if attempt.seq <= self.committed {
            tracing::debug!(attempt = attempt.seq, committed = self.committed, "discarding stale sign-in");
            return Err(SignInError::Superseded);
        }

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                tracing::info!(error = %e, "sign-in failed");
                return Err(SignInError::AuthenticationFailed);
            }
        };
        if response.token.is_empty() {
            tracing::warn!("sign-in response carried an empty token");
            return Err(SignInError::AuthenticationFailed);
        }

        let role = Role::from_flag(response.is_admin);
        self.persist(&response.token, role)?;
        self.session = Session::signed_in(response.token, role);
        self.committed = attempt.seq;
        tracing::info!(role = role.marker(), "signed in");
        Ok(self.session.clone())
    }

    /// Sign in with a single awaited authentication call.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::begin_sign_in`] and [`SessionStore::complete_sign_in`].
    pub async fn sign_in<A>(&mut self, authenticator: &A, credentials: &Credentials) -> Result<Session, SignInError>
    where
        A: Authenticator + ?Sized,
    {
        let attempt = self.begin_sign_in()?;
        let outcome = authenticator.authenticate(credentials).await;
        self.complete_sign_in(attempt, outcome)
    }

    /// Clear the session and its storage entries. Invalidates in-flight sign-ins.
    pub fn sign_out(&mut self) {
        self.issued += 1;
        self.committed = self.issued;
        self.session = Session::logged_out();
        for key in [TOKEN_KEY, ROLE_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                tracing::warn!(key, error = %e, "failed to remove session key");
                // An empty token restores as logged out.
                if key == TOKEN_KEY {
                    let _ = self.storage.set_item(TOKEN_KEY, "");
                }
            }
        }
        tracing::info!("signed out");
    }

    /// Force a sign-out after a protected endpoint rejected `rejected_token`.
    ///
    /// Only acts when that token is still the current one, so a late 401 for
    /// an old session cannot end a newer one. Returns whether it signed out.
    pub fn expire(&mut self, rejected_token: &str) -> bool {
        if self.session.token() != Some(rejected_token) {
            return false;
        }
        tracing::info!("bearer token rejected; forcing sign-out");
        self.sign_out();
        true
    }

    fn persist(&mut self, token: &str, role: Role) -> Result<(), SignInError> {
        let written = self
            .storage
            .set_item(TOKEN_KEY, token)
            .and_then(|()| self.storage.set_item(ROLE_KEY, role.marker()));
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to persist session");
            let _ = self.storage.remove_item(TOKEN_KEY);
            let _ = self.storage.remove_item(ROLE_KEY);
            return Err(SignInError::StorageUnavailable);
        }
        Ok(())
    }
}

fn restore<S: Storage>(storage: &S) -> Session {
    let token = match storage.get_item(TOKEN_KEY) {
        Ok(Some(token)) => token,
        Ok(None) => return Session::logged_out(),
        Err(e) => {
            tracing::warn!(error = %e, "session token unreadable; starting signed out");
            return Session::logged_out();
        }
    };
    let role = match storage.get_item(ROLE_KEY) {
        Ok(marker) => marker.as_deref().map_or(Role::User, Role::from_marker),
        Err(e) => {
            tracing::warn!(error = %e, "session role unreadable; starting signed out");
            return Session::logged_out();
        }
    };
    Session::signed_in(token, role)
}
