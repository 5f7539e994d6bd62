//! Admin add/edit event pages.
//!
//! Both pages share `EventFormView`; they differ only in how the form is
//! seeded and which endpoint receives the validated draft.

use auth::Tier;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::shell::AppShell;
use crate::net::api;
use crate::state::auth::use_auth;
use crate::state::event_form::{EventDraft, EventForm, Field};

#[component]
pub fn AddEventPage() -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(EventForm::default());
    let status = SubmitStatus::new();

    let on_submit = Callback::new(move |draft: EventDraft| {
        let Some(token) = auth.token_untracked() else {
            return;
        };
        status.busy.set(true);
        leptos::task::spawn_local(async move {
            let result = auth.observe(&token, api::create_event(&token, &draft).await);
            status.finish(result.map_err(|e| format!("Could not create event: {e}")));
        });
    });

    view! {
        <AppShell tier=Tier::Admin>
            <EventFormView title="Add Event" submit_label="Create Event" form=form status=status on_submit=on_submit/>
        </AppShell>
    }
}

#[component]
pub fn EditEventPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let event_id = move || params.read().get("id").unwrap_or_default();
    let form = RwSignal::new(EventForm::default());
    let status = SubmitStatus::new();

    Effect::new(move || {
        let id = event_id();
        let Some(token) = auth.token_for(Tier::Admin) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match auth.observe(&token, api::fetch_event(&token, &id).await) {
                Ok(event) => form.set(EventForm::from_event(&event)),
                Err(e) => status.message.set(format!("Could not load event: {e}")),
            }
        });
    });

    let on_submit = Callback::new(move |draft: EventDraft| {
        let Some(token) = auth.token_untracked() else {
            return;
        };
        status.busy.set(true);
        let id = event_id();
        leptos::task::spawn_local(async move {
            let result = auth.observe(&token, api::update_event(&token, &id, &draft).await);
            status.finish(result.map_err(|e| format!("Could not update event: {e}")));
        });
    });

    view! {
        <AppShell tier=Tier::Admin>
            <EventFormView title="Edit Event" submit_label="Save Changes" form=form status=status on_submit=on_submit/>
        </AppShell>
    }
}

/// Submission progress shared between a page and its form view.
#[derive(Clone, Copy)]
struct SubmitStatus {
    busy: RwSignal<bool>,
    message: RwSignal<String>,
    saved: RwSignal<bool>,
}

impl SubmitStatus {
    fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
            message: RwSignal::new(String::new()),
            saved: RwSignal::new(false),
        }
    }

    fn finish(self, result: Result<(), String>) {
        match result {
            Ok(()) => self.saved.set(true),
            Err(message) => self.message.set(message),
        }
        self.busy.set(false);
    }
}

#[component]
fn EventFormView(
    title: &'static str,
    submit_label: &'static str,
    form: RwSignal<EventForm>,
    status: SubmitStatus,
    on_submit: Callback<EventDraft>,
) -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        if status.saved.get() {
            navigate("/admin", NavigateOptions::default());
        }
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.busy.get_untracked() {
            return;
        }
        match form.with_untracked(EventForm::validate) {
            Ok(draft) => {
                status.message.set(String::new());
                on_submit.run(draft);
            }
            Err(e) => status.message.set(e.to_string()),
        }
    };

    view! {
        <section class="event-form-page">
            <h2>{title}</h2>
            <form class="event-form" on:submit=submit>
                {Field::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <label class="event-form__field">
                                <span class="event-form__label">
                                    {field.label()}
                                    {field.required().then_some(" *")}
                                </span>
                                <input
                                    class="event-form__input"
                                    type=field.input_type()
                                    min=(field.input_type() == "number").then_some("0")
                                    prop:value=move || form.with(|f| f.get(field).to_owned())
                                    on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                                />
                            </label>
                        }
                    })
                    .collect_view()}
                <button class="btn event-form__submit" type="submit" disabled=move || status.busy.get()>
                    {submit_label}
                </button>
            </form>
            <Show when=move || !status.message.get().is_empty()>
                <p class="event-form__message">{move || status.message.get()}</p>
            </Show>
        </section>
    }
}
