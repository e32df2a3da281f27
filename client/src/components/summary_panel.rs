//! Aggregate totals under the hero copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/dashboard/summary` once on mount. Until that succeeds nothing is
//! rendered; a failed fetch keeps it that way.

use contract::Backend as _;
use leptos::prelude::*;

use crate::components::stat::Stat;
use crate::net::api::HttpBackend;
use crate::state::summary::SummaryState;
use crate::util::report;

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let summary = RwSignal::new(SummaryState::default());

    Effect::new(move || {
        let Some(token) = summary.try_update(SummaryState::begin_load) else {
            return;
        };
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.dashboard_summary().await;
            report::swallow("summary", summary.try_update(|s| s.apply(token, result)));
        });
    });

    view! {
        {move || {
            summary
                .with(SummaryState::stats)
                .map(|stats| {
                    view! {
                        <div class="summary-panel">
                            {stats
                                .into_iter()
                                .map(|(label, value)| view! { <Stat label=label value=value/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
        }}
    }
}
