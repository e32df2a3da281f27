//! Headline, calls to action, live totals and the feature tiles.

use leptos::prelude::*;

use crate::components::summary_panel::SummaryPanel;

const FEATURE_TILES: [(&str, &str); 6] = [
    ("Drag-and-drop forms", "hero__tile--blue"),
    ("Rules-based approvals", "hero__tile--indigo"),
    ("PDF generation", "hero__tile--emerald"),
    ("Document archive", "hero__tile--amber"),
    ("Dashboards", "hero__tile--pink"),
    ("SaaS billing-ready", "hero__tile--gray"),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <h1 class="hero__title">"No-code workflow automation for modern SMEs"</h1>
                    <p class="hero__lede">
                        "Collect requests with forms, route approvals, auto-generate PDFs, archive documents, and track it all from clean dashboards."
                    </p>
                    <div class="hero__actions">
                        <a class="btn btn--primary" href="#templates">"Explore templates"</a>
                        <a class="btn btn--muted" href="/test">"Check backend"</a>
                    </div>
                    <SummaryPanel/>
                </div>
                <div class="hero__tiles">
                    {FEATURE_TILES
                        .into_iter()
                        .map(|(label, tone)| view! { <div class=format!("hero__tile {tone}")>{label}</div> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
