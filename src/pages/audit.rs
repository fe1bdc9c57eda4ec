//! Admin audit trail with audit-id search.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::types::AuditEntry;
use crate::util::format::split_timestamp;

/// Entries whose audit id contains `term`, ignoring case. A blank term keeps all.
pub(crate) fn filter_by_audit_id(entries: &[AuditEntry], term: &str) -> Vec<AuditEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.audit_id.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn AuditPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let search = RwSignal::new(String::new());

    let api_base_url = config.api_base_url;
    let history = LocalResource::new(move || {
        let api_base_url = api_base_url.clone();
        async move { api::fetch_audit_history(&api_base_url).await }
    });

    view! {
        <div class="audit-page">
            <Navbar title="Audit History"/>
            <div class="audit-page__toolbar">
                <input
                    class="audit-page__search"
                    type="search"
                    placeholder="Search audit ID"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn" on:click=move |_| history.refetch()>
                    "Refresh"
                </button>
            </div>
            <Suspense fallback=move || view! { <p>"Loading audit trail..."</p> }>
                {move || {
                    history
                        .get()
                        .map(|outcome| match outcome {
                            Ok(entries) => {
                                let rows = search.with(|term| filter_by_audit_id(&entries, term));
                                view! { <AuditTable rows/> }.into_any()
                            }
                            Err(err) => {
                                let message = err.message();
                                view! { <p class="audit-page__error">{message}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn AuditTable(rows: Vec<AuditEntry>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="audit-page__empty">"No audit records found."</p> }.into_any();
    }
    view! {
        <table class="audit-table">
            <thead>
                <tr>
                    <th>"Audit ID"</th>
                    <th>"Clinician"</th>
                    <th>"Triage"</th>
                    <th>"Date"</th>
                    <th>"Time (UTC)"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|entry| {
                        let (date, time) = split_timestamp(&entry.analysis_time);
                        let modifier = entry.triage_result.css_modifier();
                        let badge = format!("badge badge--{modifier}");
                        view! {
                            <tr>
                                <td class="audit-table__id">{entry.audit_id}</td>
                                <td>{entry.doctor_name}</td>
                                <td>
                                    <span class=badge>{entry.triage_result.as_str()}</span>
                                </td>
                                <td>{date}</td>
                                <td>{time}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
