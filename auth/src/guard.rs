//! Route guard: maps a session and a required tier to render-or-redirect.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of its inputs. It is re-run on every
//! navigation and every session change; nothing about a previous decision is
//! remembered. Views consume the resulting [`Decision`] and never inspect
//! role flags themselves.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::{AccessState, Session};

/// Minimum capability a view requires. Ordered from least to most privileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Sign-in view only.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed in with the admin role.
    Admin,
}

/// Where a redirect sends the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    SignIn,
    Home,
    AdminHome,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::Home => "/",
            Self::AdminHome => "/admin",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    Render,
    Redirect(Destination),
}

impl Decision {
    #[must_use]
    pub fn can_render(self) -> bool {
        matches!(self, Self::Render)
    }

    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Render => None,
            Self::Redirect(dest) => Some(dest.path()),
        }
    }
}

/// Landing view for a signed-in session.
#[must_use]
pub fn default_destination(session: &Session) -> Destination {
    if session.is_admin() {
        Destination::AdminHome
    } else {
        Destination::Home
    }
}

/// Decide what the user sees for a view requiring `tier`.
///
/// Signed-in non-admins asking for an admin view are sent to sign-in, the
/// same as signed-out users; there is no separate forbidden outcome.
#[must_use]
pub fn decide(session: &Session, tier: Tier) -> Decision {
    match (tier, session.access()) {
        (Tier::Public, AccessState::Unauthenticated)
        | (Tier::Authenticated, AccessState::AuthenticatedUser | AccessState::AuthenticatedAdmin)
        | (Tier::Admin, AccessState::AuthenticatedAdmin) => Decision::Render,
        (Tier::Public, _) => Decision::Redirect(default_destination(session)),
        (Tier::Authenticated | Tier::Admin, _) => Decision::Redirect(Destination::SignIn),
    }
}

/// Bearer token for requests made on behalf of a view requiring `tier`.
///
/// `None` whenever the view would not render, so a view never issues a
/// request its guard has not cleared.
#[must_use]
pub fn authorized_token(session: &Session, tier: Tier) -> Option<&str> {
    if decide(session, tier).can_render() {
        session.token()
    } else {
        None
    }
}
