//! QR code view for a purchased ticket.

use auth::Tier;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::shell::AppShell;
use crate::util::format::short_id;
use crate::util::qr::qr_svg;

#[component]
pub fn QrPage() -> impl IntoView {
    let params = use_params_map();
    let ticket_id = move || params.read().get("ticket_id").unwrap_or_default();

    view! {
        <AppShell tier=Tier::Authenticated>
            <section class="qr-page">
                <h2>{move || format!("Ticket #{}", short_id(&ticket_id()))}</h2>
                {move || match qr_svg(&ticket_id()) {
                    Some(svg) => view! { <div class="qr-page__code" inner_html=svg></div> }.into_any(),
                    None => view! { <p class="qr-page__error">"Could not render a QR code for this ticket."</p> }
                        .into_any(),
                }}
                <a class="btn" href="/tickets">"Back to My Tickets"</a>
            </section>
        </AppShell>
    }
}
