//! Login page: username + password against the triage backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::HttpBackend;
use crate::net::types::Credentials;
use crate::state::session::{AuthBackend, BrowserSession};
use crate::util::route::AppRoute;

const MISSING_INPUT_MESSAGE: &str = "Enter both username and password.";

/// Trim the identifier and require both fields before any request is made.
pub(crate) fn validate_login_input(
    username: &str,
    password: &str,
) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_INPUT_MESSAGE);
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let config = expect_context::<ClientConfig>();
    let backend = HttpBackend::new(config.api_base_url);
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let typed_username = username.get_untracked();
        let typed_password = password.get_untracked();
        let credentials = match validate_login_input(&typed_username, &typed_password) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let backend = backend.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = backend.login(&credentials).await;
            // Page torn down while the request was in flight.
            if busy.is_disposed() {
                log::debug!("login: page closed, ignoring response");
                return;
            }
            match session.try_update(|store| store.complete_login(outcome)) {
                Some(Ok(role)) => {
                    let home = AppRoute::home_for(role).path();
                    navigate(home, NavigateOptions::default());
                }
                Some(Err(err)) => {
                    error.set(err.to_string());
                    busy.set(false);
                }
                None => log::debug!("login: session gone, ignoring response"),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Medical Portal Access"</h1>
                <p class="login-card__subtitle">"Authorized Clinicians Only"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label">
                        "Identity ID"
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-label">
                        "Access Key"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Enter System" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
