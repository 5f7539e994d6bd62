//! # client
//!
//! Leptos + WASM front-end for the EventX ticketing platform.
//!
//! Pages, components, and view state live here. Every data operation is a
//! direct call to the external EventX API; authentication state and route
//! protection come from the `auth` crate, provided to the view tree through
//! [`state::auth::AuthContext`].

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and mount the app.
///
/// No tracing subscriber is installed; the `auth` crate's `tracing` events
/// reach the console through tracing's `log` bridge and `console_log`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
