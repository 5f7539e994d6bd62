//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped fetches and delegates rendering details
//! to `components`. Every page except sign-in renders inside `AppShell`,
//! which applies the route guard for the page's tier.

pub mod analytics;
pub mod event_details;
pub mod event_form;
pub mod events;
pub mod qr;
pub mod signin;
pub mod tickets;
