//! Page chrome for signed-in views.

use auth::Tier;
use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::components::nav_bar::NavBar;

/// Guarded page with the navigation bar on top.
#[component]
pub fn AppShell(#[prop(default = Tier::Authenticated)] tier: Tier, children: ChildrenFn) -> impl IntoView {
    view! {
        <Guarded tier=tier>
            <div class="app-shell">
                <NavBar/>
                <main class="app-shell__main">{children()}</main>
            </div>
        </Guarded>
    }
}
