//! Card for one event in the events list.
//!
//! DESIGN
//! ======
//! The same card serves both dashboards; `admin` only adds the edit link so
//! the two lists cannot drift apart visually.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::Event;
use crate::state::events::sold_percent;
use crate::util::format::format_price;

#[component]
pub fn EventCard(event: Event, #[prop(optional)] admin: bool) -> impl IntoView {
    let details_href = format!("/event/{}", event.id);
    let edit_href = format!("/admin/edit/{}", event.id);
    let percent = sold_percent(event.sold_seats, event.total_seats);
    let seats = format!("{} / {} seats available", event.available(), event.total_seats);
    let price = match event.price {
        Some(_) => format!("EGP {}", format_price(event.price)),
        None => format_price(None),
    };
    let when = if event.time.is_empty() {
        event.date.clone()
    } else {
        format!("{} {}", event.date, event.time)
    };

    view! {
        <article class="event-card">
            <header class="event-card__header">
                <a class="event-card__name" href=details_href>{event.name}</a>
                <StatusBadge status=event.status/>
            </header>
            <p class="event-card__venue">{event.venue}</p>
            <p class="event-card__when">{when}</p>
            <p class="event-card__price">{price}</p>
            <div class="progress" title=format!("{percent:.0}% sold")>
                <div class="progress__fill" style=format!("width: {percent:.1}%")></div>
            </div>
            <p class="event-card__seats">{seats}</p>
            <Show when=move || admin>
                <a class="btn event-card__edit" href=edit_href.clone()>"Edit"</a>
            </Show>
        </article>
    }
}
