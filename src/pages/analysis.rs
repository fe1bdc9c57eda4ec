//! Result viewer for the most recent analysis.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::state::analysis::{AnalysisReport, AnalysisState};
use crate::util::format::percent;
use crate::util::route::AppRoute;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let analysis = expect_context::<RwSignal<AnalysisState>>();

    view! {
        <div class="result-page">
            <Navbar title="Analysis Result"/>
            {move || match analysis.with(|state| state.latest().cloned()) {
                Some(report) => view! { <ResultView report/> }.into_any(),
                None => view! {
                    <div class="result-page__empty">
                        <p>"No analysis data available."</p>
                        <a class="btn btn--primary" href=AppRoute::Dashboard.path()>
                            "Back to Dashboard"
                        </a>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn ResultView(report: AnalysisReport) -> impl IntoView {
    let preview_url = report.preview_url;
    let result = report.result;
    let ranked: Vec<(String, f64)> = result
        .ranked_predictions()
        .into_iter()
        .map(|(label, p)| (label.to_owned(), p))
        .collect();
    let heatmap = result.heatmap_data_url();
    let modifier = result.triage.level.css_modifier();
    let triage_class = format!("result-triage result-triage--{modifier}");

    view! {
        <main class="result-page__main">
            <section class="result-images">
                <figure>
                    <img src=preview_url alt="Original X-ray"/>
                    <figcaption>"Original"</figcaption>
                </figure>
                <figure>
                    <img src=heatmap alt="Grad-CAM heatmap"/>
                    <figcaption>"Grad-CAM"</figcaption>
                </figure>
            </section>
            <section class=triage_class>
                <p class="result-triage__confidence">{percent(result.top_confidence)}</p>
                <h2>{result.triage.level.as_str()}</h2>
                <p class="result-triage__action">{result.triage.action}</p>
                <p class="result-triage__finding">"Top finding: " {result.top_disease}</p>
            </section>
            <section class="result-predictions">
                <h3>"Probabilities"</h3>
                <ul>
                    {ranked
                        .into_iter()
                        .map(|(label, p)| {
                            let width = format!("width: {}", percent(p));
                            view! {
                                <li class="result-predictions__row">
                                    <span>{label}</span>
                                    <span>{percent(p)}</span>
                                    <div class="result-predictions__bar" style=width></div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>
            <section class="result-narrative">
                <h3>"Clinical narrative"</h3>
                <p>{result.textual_explanation}</p>
            </section>
            <footer class="result-page__footer">
                <span class="result-page__audit">"Audit ID: " {result.audit_id}</span>
                {result.compliance_note.map(|note| {
                    view! { <span class="result-page__compliance">{note}</span> }
                })}
            </footer>
        </main>
    }
}
