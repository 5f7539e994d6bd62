//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior, so every
//! guarded view installs the same effect instead of checking roles itself.

use auth::Tier;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthContext;

/// Navigate away whenever the route guard says the current session may not
/// render a view requiring `tier`. Re-evaluated on every session change.
pub fn install_guard_redirect<F>(auth: AuthContext, tier: Tier, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = auth.decide(tier).redirect_path() {
            navigate(
                path,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}
