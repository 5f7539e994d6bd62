//! Session snapshot and access-state derivation.
//!
//! DESIGN
//! ======
//! A `Session` is an immutable value with private fields. The login flag is
//! derived from the token at construction, so an empty token always yields
//! the logged-out session and the two can never disagree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Role marker persisted for administrators.
pub const ADMIN_ROLE_MARKER: &str = "Admin";
/// Role marker persisted for everyone else.
pub const USER_ROLE_MARKER: &str = "User";

/// Role granted by the authentication endpoint for the lifetime of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn from_flag(is_admin: bool) -> Self {
        if is_admin { Self::Admin } else { Self::User }
    }

    /// Parse a stored role marker. Anything other than the admin marker is a plain user.
    #[must_use]
    pub fn from_marker(raw: &str) -> Self {
        Self::from_flag(raw == ADMIN_ROLE_MARKER)
    }

    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_ROLE_MARKER,
            Self::User => USER_ROLE_MARKER,
        }
    }
}

/// Coarse authorization state used by the route guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessState {
    Unauthenticated,
    AuthenticatedUser,
    AuthenticatedAdmin,
}

impl AccessState {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unauthenticated => "signed out",
            Self::AuthenticatedUser => "signed in",
            Self::AuthenticatedAdmin => "signed in (admin)",
        }
    }
}

/// Who is using this client right now.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    is_logged_in: bool,
    is_admin: bool,
    token: Option<String>,
}

impl Session {
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Build a signed-in session. An empty token produces the logged-out session.
    #[must_use]
    pub fn signed_in(token: impl Into<String>, role: Role) -> Self {
        let token = token.into();
        if token.is_empty() {
            return Self::logged_out();
        }
        Self {
            is_logged_in: true,
            is_admin: role == Role::Admin,
            token: Some(token),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Always `false` while logged out.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.is_logged_in.then(|| Role::from_flag(self.is_admin))
    }

    #[must_use]
    pub fn access(&self) -> AccessState {
        match (self.is_logged_in, self.is_admin) {
            (false, _) => AccessState::Unauthenticated,
            (true, false) => AccessState::AuthenticatedUser,
            (true, true) => AccessState::AuthenticatedAdmin,
        }
    }

    /// `Authorization` header value for outbound API calls.
    #[must_use]
    pub fn bearer_header(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}
