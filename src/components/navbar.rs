//! Header bar for authenticated pages: identity, navigation and logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::analysis::AnalysisState;
use crate::state::session::{BrowserSession, SessionStore};
use crate::state::storage::SessionStorage;
use crate::util::route::AppRoute;
use crate::util::upload;

/// End the session and forget the latest report so the next user starts
/// clean. Returns the report's preview URL for the caller to release.
pub(crate) fn sign_out<S: SessionStorage>(
    session: &mut SessionStore<S>,
    analysis: &mut AnalysisState,
) -> Option<String> {
    session.logout();
    analysis.clear()
}

#[component]
pub fn Navbar(#[prop(into)] title: String) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    let name = move || {
        session
            .with(|store| store.user().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };
    let role = move || session.with(|store| store.state().role());
    let badge = move || role().map(Role::label).unwrap_or_default();
    let is_admin = move || role() == Some(Role::Admin);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        let mut stale = None;
        session.update(|s| analysis.update(|a| stale = sign_out(s, a)));
        if let Some(url) = stale {
            upload::revoke_preview(&url);
        }
    };

    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <span class="navbar__logo">"JAGAT-X"</span>
                <span class="navbar__title">{title}</span>
            </div>
            <div class="navbar__identity">
                <span class="navbar__name">{name}</span>
                <span class="navbar__badge">{badge}</span>
            </div>
            <nav class="navbar__links">
                <a href=AppRoute::Dashboard.path()>"Dashboard"</a>
                <Show when=is_admin>
                    <a href=AppRoute::AuditHistory.path()>"Audit History"</a>
                </Show>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </nav>
        </header>
    }
}
