//! Public landing page.

use leptos::prelude::*;

use crate::state::session::BrowserSession;
use crate::util::route::AppRoute;

const CONDITIONS: [&str; 6] = [
    "Pneumothorax",
    "Edema",
    "Pneumonia",
    "Effusion",
    "TBC",
    "Cardiomegaly",
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();

    // Logged-in users go straight to their own desk.
    let entry_path = move || {
        let role = session.with(|store| store.state().role());
        role.map_or(AppRoute::Login, AppRoute::home_for).path()
    };

    view! {
        <div class="landing-page">
            <header class="landing-page__hero">
                <h1>"JAGAT-X"</h1>
                <p>"Intelligent chest X-ray triage for clinicians."</p>
                <a class="btn btn--primary" href=entry_path>
                    "Enter Portal"
                </a>
            </header>
            <section class="landing-page__conditions">
                <h2>"Screened conditions"</h2>
                <ul>
                    {CONDITIONS
                        .into_iter()
                        .map(|c| view! { <li>{c}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
            <footer class="landing-page__footer">
                "Images are processed ephemerally. No patient identifiers are stored."
            </footer>
        </div>
    }
}
