//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the guarded page chrome and the repeated event/stat
//! widgets. They read the session from `AuthContext` but never change it,
//! apart from the navigation bar's logout button.

pub mod event_card;
pub mod guarded;
pub mod nav_bar;
pub mod shell;
pub mod stat_card;
pub mod status_badge;
