//! Event details page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Any signed-in user can open this view. Admins get ticket allocation and
//! an edit link; regular users get the buy action. Which set renders is
//! taken from the route guard, never from role flags directly.

use auth::Tier;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::shell::AppShell;
use crate::components::status_badge::StatusBadge;
use crate::net::api;
use crate::net::types::Event;
use crate::state::auth::use_auth;
use crate::state::events::sold_percent;
use crate::util::format::format_price;

#[component]
pub fn EventDetailsPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let event_id = move || params.read().get("id").unwrap_or_default();

    let event = RwSignal::new(None::<Event>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let user_id = RwSignal::new(String::new());
    let is_admin = move || auth.decide(Tier::Admin).can_render();

    Effect::new(move || {
        let id = event_id();
        let Some(token) = auth.token_for(Tier::Authenticated) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::fetch_event(&token, &id).await) {
                Ok(found) => {
                    event.set(Some(found));
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Could not load event: {e}"))),
            }
        });
    });

    let purchased = RwSignal::new(false);
    let navigate = use_navigate();
    Effect::new(move || {
        if purchased.get() {
            navigate("/tickets", NavigateOptions::default());
        }
    });

    let on_buy = move |_| {
        let Some(token) = auth.token_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let id = event_id();
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::buy_ticket(&token, &id).await) {
                Ok(()) => purchased.set(true),
                Err(e) => notice.set(format!("Purchase failed: {e}")),
            }
            busy.set(false);
        });
    };

    let on_allocate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = auth.token_untracked() else {
            return;
        };
        let target = user_id.get_untracked().trim().to_owned();
        if target.is_empty() {
            notice.set("Enter a user id to allocate a ticket.".to_owned());
            return;
        }
        busy.set(true);
        let id = event_id();
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::allocate_ticket(&token, &id, &target).await) {
                Ok(()) => {
                    notice.set(format!("Ticket allocated to {target}."));
                    user_id.set(String::new());
                }
                Err(e) => notice.set(format!("Allocation failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <AppShell tier=Tier::Authenticated>
            <section class="event-details">
                <Show when=move || error.get().is_some()>
                    <p class="event-details__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    event
                        .get()
                        .map(|e| {
                            let percent = sold_percent(e.sold_seats, e.total_seats);
                            view! {
                                <header class="event-details__header">
                                    <h2>{e.name.clone()}</h2>
                                    <StatusBadge status=e.status.clone()/>
                                </header>
                                <p class="event-details__description">{e.description.clone()}</p>
                                <dl class="event-details__facts">
                                    <dt>"Venue"</dt>
                                    <dd>{e.venue.clone()}</dd>
                                    <dt>"Date"</dt>
                                    <dd>{format!("{} {}", e.date, e.time)}</dd>
                                    <dt>"Category"</dt>
                                    <dd>{e.category.clone()}</dd>
                                    <dt>"Price"</dt>
                                    <dd>{format_price(e.price)}</dd>
                                    <dt>"Seats"</dt>
                                    <dd>{format!("{} of {} available ({percent:.0}% sold)", e.available(), e.total_seats)}</dd>
                                </dl>
                            }
                        })
                }}
                <Show
                    when=is_admin
                    fallback=move || {
                        view! {
                            <button
                                class="btn event-details__buy"
                                disabled=move || busy.get() || event.with(Option::is_none)
                                on:click=on_buy
                            >
                                "Buy Ticket"
                            </button>
                        }
                    }
                >
                    <form class="event-details__allocate" on:submit=on_allocate>
                        <input
                            type="text"
                            placeholder="User id"
                            prop:value=move || user_id.get()
                            on:input=move |ev| user_id.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || busy.get()>"Allocate Ticket"</button>
                    </form>
                    <a class="btn event-details__edit" href=move || format!("/admin/edit/{}", event_id())>
                        "Edit Event"
                    </a>
                </Show>
                <Show when=move || !notice.get().is_empty()>
                    <p class="event-details__notice">{move || notice.get()}</p>
                </Show>
            </section>
        </AppShell>
    }
}
