//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::protected::{Protected, replace_history};
use crate::config::ClientConfig;
use crate::pages::{
    analysis::AnalysisPage, audit::AuditPage, dashboard::DashboardPage, landing::LandingPage,
    login::LoginPage,
};
use crate::state::analysis::AnalysisState;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Root application component.
///
/// Restores the persisted session before the router mounts, then provides
/// config, session and latest-analysis contexts to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let storage_key = config.session_storage_key.clone();
    let mut store = SessionStore::new(BrowserStorage, storage_key);
    let recovery = store.initialize();
    log::debug!("app: session recovery {recovery:?}");

    provide_context(config);
    provide_context(RwSignal::new(store));
    provide_context(RwSignal::new(AnalysisState::default()));

    view! {
        <Title text="JAGAT-X"/>

        <Router>
            <Routes fallback=|| {
                let options = replace_history();
                view! { <Redirect path="/" options/> }
            }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("analysis-result")
                    view=|| view! { <Protected><AnalysisPage/></Protected> }
                />
                <Route
                    path=StaticSegment("audit-history")
                    view=|| view! { <Protected><AuditPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}
