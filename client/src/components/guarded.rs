//! Route guard wrapper for page content.

use auth::Tier;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::auth::install_guard_redirect;

/// Render `children` only while the session satisfies `tier`; otherwise
/// redirect to wherever the guard points. Nothing of the protected view is
/// rendered in the redirect case.
#[component]
pub fn Guarded(tier: Tier, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    install_guard_redirect(auth, tier, move |path, options| navigate(path, options));

    view! {
        <Show
            when=move || auth.decide(tier).can_render()
            fallback=|| view! { <p class="page__redirecting">"Redirecting..."</p> }
        >
            {children()}
        </Show>
    }
}
