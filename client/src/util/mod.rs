//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser storage, route-guard redirects, QR rendering, and display
//! formatting, kept out of page and component code.

pub mod auth;
pub mod format;
pub mod qr;
pub mod storage;
