//! Events dashboards for users (`/`) and admins (`/admin`).

use auth::Tier;
use leptos::prelude::*;

use crate::components::event_card::EventCard;
use crate::components::shell::AppShell;
use crate::net::api;
use crate::net::types::Event;
use crate::state::auth::use_auth;
use crate::state::events::{SortKey, visible_events};

#[component]
pub fn EventsPage() -> impl IntoView {
    view! {
        <AppShell tier=Tier::Authenticated>
            <EventList admin=false/>
        </AppShell>
    }
}

#[component]
pub fn AdminEventsPage() -> impl IntoView {
    view! {
        <AppShell tier=Tier::Admin>
            <EventList admin=true/>
        </AppShell>
    }
}

#[component]
fn EventList(admin: bool) -> impl IntoView {
    let auth = use_auth();
    let events = RwSignal::new(Vec::<Event>::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let term = RwSignal::new(String::new());
    let sort = RwSignal::new(SortKey::None);
    let tier = if admin { Tier::Admin } else { Tier::Authenticated };

    Effect::new(move || {
        let Some(token) = auth.token_for(tier) else {
            return;
        };
        loading.set(true);
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::fetch_events(&token).await) {
                Ok(list) => {
                    events.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Could not load events: {e}"))),
            }
            loading.set(false);
        });
    });

    let visible = move || events.with(|list| visible_events(list, &term.get(), sort.get()));

    view! {
        <section class="events-page">
            <header class="events-page__header">
                <h2>{if admin { "Manage Events" } else { "Upcoming Events" }}</h2>
                <input
                    class="events-page__search"
                    type="search"
                    placeholder="Search by name or venue"
                    prop:value=move || term.get()
                    on:input=move |ev| term.set(event_target_value(&ev))
                />
                <select
                    class="events-page__sort"
                    on:change=move |ev| sort.set(SortKey::from_value(&event_target_value(&ev)))
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.value()>{key.label()}</option> })
                        .collect_view()}
                </select>
            </header>
            <Show when=move || error.get().is_some()>
                <p class="events-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p>"Loading events..."</p> }>
                <div class="events-page__grid">
                    {move || {
                        let list = visible();
                        if list.is_empty() {
                            return view! { <p class="events-page__empty">"No events found."</p> }.into_any();
                        }
                        list.into_iter()
                            .map(|event| view! { <EventCard event=event admin=admin/> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </section>
    }
}
