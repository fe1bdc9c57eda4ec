//! Analysis desk: pick a chest X-ray, preview it, submit it for triage.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api::{self, DEFAULT_CLINICIAN_NAME, PendingUpload};
use crate::net::types::User;
use crate::state::analysis::{AnalysisReport, AnalysisState};
use crate::state::session::BrowserSession;
use crate::util::route::AppRoute;
use crate::util::upload;

/// Name recorded against the analysis in the audit trail.
pub(crate) fn clinician_name(user: Option<&User>) -> String {
    user.and_then(|u| u.full_name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CLINICIAN_NAME)
        .to_owned()
}

/// Swap the selected image, releasing the old preview unless the latest
/// report still shows it.
fn replace_selection(
    selected: RwSignal<Option<PendingUpload>>,
    analysis: RwSignal<AnalysisState>,
    next: Option<PendingUpload>,
) {
    let previous = selected.with_untracked(|s| s.as_ref().map(|u| u.preview_url.clone()));
    if let Some(url) = previous {
        let shown = |a: &AnalysisState| a.latest().is_some_and(|r| r.preview_url == url);
        if !analysis.with_untracked(shown) {
            upload::revoke_preview(&url);
        }
    }
    selected.set(next);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<BrowserSession>>();
    let analysis = expect_context::<RwSignal<AnalysisState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let selected = RwSignal::new(None::<PendingUpload>);
    let notice = RwSignal::new(String::new());
    let analyzing = RwSignal::new(false);

    let on_file_change = move |ev: leptos::ev::Event| {
        notice.set(String::new());
        #[cfg(feature = "csr")]
        {
            let Some(file) = upload::file_from_event(&ev) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let outcome = upload::read_image(file).await;
                if selected.is_disposed() {
                    return;
                }
                match outcome {
                    Ok(image) => replace_selection(selected, analysis, Some(image)),
                    Err(err) => notice.set(err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        replace_selection(selected, analysis, None);
        notice.set(String::new());
    };

    let on_analyze = move |_: leptos::ev::MouseEvent| {
        if analyzing.get_untracked() {
            return;
        }
        let Some(image) = selected.get_untracked() else {
            return;
        };
        let user_fullname = session.with_untracked(|store| clinician_name(store.user()));
        let api_base_url = config.api_base_url.clone();
        let navigate = navigate.clone();
        analyzing.set(true);
        notice.set(String::new());

        leptos::task::spawn_local(async move {
            let outcome = api::analyze(&api_base_url, &image, &user_fullname).await;
            if analyzing.is_disposed() {
                log::debug!("analyze: page closed, ignoring response");
                return;
            }
            analyzing.set(false);
            match outcome {
                Ok(result) => {
                    let level = result.triage.level.as_str();
                    log::info!("analyze: {} triaged {level}", result.audit_id);
                    let report = AnalysisReport {
                        result,
                        preview_url: image.preview_url,
                    };
                    let displaced = analysis.try_update(|state| state.record(report));
                    if let Some(url) = displaced.flatten() {
                        upload::revoke_preview(&url);
                    }
                    navigate(AppRoute::AnalysisResult.path(), NavigateOptions::default());
                }
                Err(err) => notice.set(err.message()),
            }
        });
    };

    let preview = move || {
        selected.with(|s| {
            let image = s.as_ref()?;
            Some((image.preview_url.clone(), image.file_name.clone()))
        })
    };
    let analyze_label = move || {
        if analyzing.get() {
            "Analyzing..."
        } else {
            "Run Analysis"
        }
    };

    view! {
        <div class="dashboard-page">
            <Navbar title="Analysis Desk"/>
            <main class="dashboard-page__main">
                {move || match preview() {
                    None => view! {
                        <label class="dropzone">
                            <h3>"Upload a radiology image"</h3>
                            <p>"Choose a local JPG or PNG chest X-ray."</p>
                            <input
                                class="dropzone__input"
                                type="file"
                                accept="image/jpeg,image/png"
                                on:change=on_file_change
                            />
                        </label>
                    }
                    .into_any(),
                    Some((url, file_name)) => view! {
                        <div class="preview">
                            <img class="preview__image" src=url alt="X-ray preview"/>
                            <p class="preview__name">{file_name}</p>
                            <div class="preview__actions">
                                <button
                                    class="btn"
                                    on:click=on_clear
                                    disabled=move || analyzing.get()
                                >
                                    "Clear"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    on:click=on_analyze.clone()
                                    disabled=move || analyzing.get()
                                >
                                    {analyze_label}
                                </button>
                            </div>
                        </div>
                    }
                    .into_any(),
                }}
                <Show when=move || !notice.get().is_empty()>
                    <p class="dashboard-page__notice">{move || notice.get()}</p>
                </Show>
            </main>
        </div>
    }
}
