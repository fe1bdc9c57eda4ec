//! Session guard wrapper for protected routes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::session::BrowserSession;
use crate::util::guard::{GuardDecision, evaluate_path};

/// Navigation that replaces the current history entry.
pub(crate) fn replace_history() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Renders `children` only when the guard allows the current location.
///
/// The decision is recomputed on every navigation and every session change,
/// so logging out from inside a protected page lands on `/login`.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        match session.with(|store| evaluate_path(store.state(), &path)) {
            GuardDecision::Loading => view! {
                <div class="guard-loading">"Initializing JAGAT-X System..."</div>
            }
            .into_any(),
            GuardDecision::Redirect(target) => {
                log::debug!("guard: {path} -> {}", target.path());
                let options = replace_history();
                view! { <Redirect path=target.path() options/> }.into_any()
            }
            GuardDecision::Render => children().into_any(),
        }
    }
}
