//! Top navigation bar.

use auth::Tier;
use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let is_admin = move || auth.decide(Tier::Admin).can_render();
    let home = move || if is_admin() { "/admin" } else { "/" };

    // The guard effect on the current page performs the redirect to sign-in.
    let on_logout = move |_| auth.sign_out();

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=home>"EventX"</a>
            <span class="nav-bar__spacer"></span>
            <a class="nav-bar__link" href=home>"Dashboard"</a>
            <Show when=is_admin>
                <a class="nav-bar__link" href="/admin/analytics">"Analytics"</a>
                <a class="nav-bar__link" href="/admin/add">"Add Event"</a>
            </Show>
            <a class="nav-bar__link" href="/tickets">"My Tickets"</a>
            <span class="nav-bar__role">{move || auth.session().access().label()}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>"Logout"</button>
        </nav>
    }
}
