//! Admin analytics dashboard.

use auth::Tier;
use leptos::prelude::*;

use crate::components::shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::net::api;
use crate::net::types::Analytics;
use crate::state::analytics::{gender_rows, location_rows, stat_cards};
use crate::state::auth::use_auth;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let auth = use_auth();
    let analytics = RwSignal::new(None::<Analytics>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(token) = auth.token_for(Tier::Admin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::fetch_analytics(&token).await) {
                Ok(data) => {
                    analytics.set(Some(data));
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Could not load analytics: {e}"))),
            }
        });
    });

    view! {
        <AppShell tier=Tier::Admin>
            <section class="analytics-page">
                <h2>"Analytics"</h2>
                <Show when=move || error.get().is_some()>
                    <p class="analytics-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || {
                    analytics.get().map(|data| {
                        view! {
                            <div class="analytics-page__cards">
                                {stat_cards(&data)
                                    .into_iter()
                                    .map(|card| view! { <StatCard label=card.label value=card.value/> })
                                    .collect_view()}
                            </div>
                            <div class="analytics-page__lists">
                                <div class="analytics-page__panel">
                                    <h3>"Attendee Gender"</h3>
                                    <ul>
                                        {gender_rows(&data)
                                            .into_iter()
                                            .map(|(label, count, pct)| {
                                                view! { <li>{format!("{label}: {count} ({pct})")}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                                <div class="analytics-page__panel">
                                    <h3>"Tickets by Location"</h3>
                                    <ul>
                                        {location_rows(&data)
                                            .into_iter()
                                            .map(|(venue, count)| view! { <li>{format!("{venue}: {count}")}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            </div>
                        }
                    })
                }}
            </section>
        </AppShell>
    }
}
