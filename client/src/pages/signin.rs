//! Sign-in page.
//!
//! Once the session store commits a sign-in, the public-tier guard sends the
//! user to their landing view; this page never navigates by itself.

use auth::Tier;
use leptos::prelude::*;

use crate::components::guarded::Guarded;
use crate::state::auth::{credentials_from_input, sign_in_error_message, use_auth};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match credentials_from_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            match auth.sign_in(credentials).await {
                Ok(_) => info.set(String::new()),
                Err(e) => info.set(sign_in_error_message(e).unwrap_or_default()),
            }
            busy.set(false);
        });
    };

    view! {
        <Guarded tier=Tier::Public>
            <div class="signin-page">
                <div class="signin-card">
                    <h1>"EventX"</h1>
                    <p class="signin-card__subtitle">"Sign in to continue"</p>
                    <form class="signin-form" on:submit=on_submit>
                        <input
                            class="signin-input"
                            type="email"
                            placeholder="you@example.com"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="signin-input"
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="btn signin-button" type="submit" disabled=move || busy.get()>
                            "Sign In"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="signin-message">{move || info.get()}</p>
                    </Show>
                </div>
            </div>
        </Guarded>
    }
}
