//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::analytics::AnalyticsPage;
use crate::pages::event_details::EventDetailsPage;
use crate::pages::event_form::{AddEventPage, EditEventPage};
use crate::pages::events::{AdminEventsPage, EventsPage};
use crate::pages::qr::QrPage;
use crate::pages::signin::SignInPage;
use crate::pages::tickets::TicketsPage;
use crate::state::auth::AuthContext;

/// Root application component.
///
/// Restores the session before the first route renders, so guards see the
/// persisted state on reload instead of a transient signed-out one.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    AuthContext::provide();

    view! {
        <Title text="EventX"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("") view=EventsPage/>
                <Route path=(StaticSegment("event"), ParamSegment("id")) view=EventDetailsPage/>
                <Route path=StaticSegment("tickets") view=TicketsPage/>
                <Route path=(StaticSegment("qr"), ParamSegment("ticket_id")) view=QrPage/>
                <Route path=StaticSegment("admin") view=AdminEventsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("add")) view=AddEventPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("edit"), ParamSegment("id")) view=EditEventPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("analytics")) view=AnalyticsPage/>
            </Routes>
        </Router>
    }
}
