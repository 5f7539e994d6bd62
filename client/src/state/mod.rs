//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `events`, `event_form`) so individual
//! pages can depend on small focused models. Everything here except
//! `auth::AuthContext` is plain data plus pure functions.

pub mod analytics;
pub mod auth;
pub mod event_form;
pub mod events;
