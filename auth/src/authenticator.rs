//! Authentication endpoint seam and its payloads.

#[cfg(test)]
#[path = "authenticator_test.rs"]
mod authenticator_test;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Path of the sign-in endpoint relative to the API base URL.
pub const SIGNIN_PATH: &str = "/user/signin";

/// Sign-in request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful sign-in response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Exchanges credentials for a bearer token.
///
/// Futures are not required to be `Send` because the browser transport is
/// single-threaded.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Call the authentication endpoint once. No retries.
    ///
    /// # Errors
    ///
    /// Returns an error for any transport failure, non-success status, or
    /// malformed body.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError>;
}
