use leptos::prelude::*;

use crate::state::events::status_class;
use crate::util::format::capitalize;

#[component]
pub fn StatusBadge(status: String) -> impl IntoView {
    let class = format!("status-badge {}", status_class(&status));
    view! { <span class=class>{capitalize(&status)}</span> }
}
