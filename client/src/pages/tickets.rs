//! "My Tickets" page.

use auth::Tier;
use leptos::prelude::*;

use crate::components::shell::AppShell;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::Ticket;
use crate::state::auth::use_auth;
use crate::state::events::visible_tickets;
use crate::util::format::{format_price, short_id};

#[component]
pub fn TicketsPage() -> impl IntoView {
    let auth = use_auth();
    let tickets = RwSignal::new(Vec::<Ticket>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let term = RwSignal::new(String::new());

    Effect::new(move || {
        let Some(token) = auth.token_for(Tier::Authenticated) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::fetch_tickets(&token).await) {
                Ok(list) => {
                    tickets.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Could not load tickets: {e}"))),
            }
            loading.set(false);
        });
    });

    view! {
        <AppShell tier=Tier::Authenticated>
            <section class="tickets-page">
                <header class="tickets-page__header">
                    <h2>"My Tickets"</h2>
                    <input
                        class="tickets-page__search"
                        type="search"
                        placeholder="Search by event or venue"
                        prop:value=move || term.get()
                        on:input=move |ev| term.set(event_target_value(&ev))
                    />
                </header>
                <Show when=move || error.get().is_some()>
                    <p class="tickets-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading tickets..."</p> }>
                    <ul class="tickets-page__list">
                        {move || {
                            tickets
                                .with(|list| visible_tickets(list, &term.get()))
                                .into_iter()
                                .map(|ticket| view! { <TicketRow ticket=ticket/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </AppShell>
    }
}

#[component]
fn TicketRow(ticket: Ticket) -> impl IntoView {
    let qr_href = format!("/qr/{}", ticket.altid);
    let id_label = format!("#{}", short_id(&ticket.altid));
    view! {
        <li class="ticket-row">
            <span class="ticket-row__id">{id_label}</span>
            <span class="ticket-row__name">{ticket.name}</span>
            <span class="ticket-row__venue">{ticket.venue}</span>
            <span class="ticket-row__when">{format!("{} {}", ticket.date, ticket.time)}</span>
            <span class="ticket-row__price">{format_price(ticket.price)}</span>
            <StatusBadge status=ticket.status/>
            <a class="btn ticket-row__qr" href=qr_href>"Show QR"</a>
        </li>
    }
}
