//! Networking modules for the EventX REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs authenticated HTTP calls and implements the sign-in
//! transport; `types` defines the wire schema those calls decode.

pub mod api;
pub mod types;
