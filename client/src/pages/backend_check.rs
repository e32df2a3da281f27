//! Diagnostics page linked from the hero as "Check backend".
//!
//! Probes `/dashboard/summary` on load and on demand, and shows the configured
//! base URL so a misconfigured bundle is easy to spot.

use contract::Backend as _;
use leptos::prelude::*;

use crate::components::site_header::SiteHeader;
use crate::net::api::HttpBackend;
use crate::state::backend_check::{BackendCheckState, CheckStatus};

#[component]
pub fn BackendCheckPage() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let check = RwSignal::new(BackendCheckState::default());
    let base_url = backend.config().base_url().to_owned();

    let run_check = Callback::new(move |()| {
        let Some(token) = check.try_update(BackendCheckState::begin_check) else {
            return;
        };
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.dashboard_summary().await;
            check.update(|s| s.apply(token, result));
        });
    });

    Effect::new(move || run_check.run(()));

    view! {
        <div class="backend-check">
            <SiteHeader/>
            <section class="backend-check__card">
                <h1 class="section__title">"Backend check"</h1>
                <p class="backend-check__target">
                    "Backend URL: "
                    <code>{base_url}</code>
                </p>
                <p
                    class="backend-check__status"
                    class:backend-check__status--ok=move || {
                        check.with(|s| matches!(s.status, CheckStatus::Reachable(_)))
                    }
                >
                    {move || check.with(BackendCheckState::status_line)}
                </p>
                <div class="backend-check__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| run_check.run(())
                        disabled=move || check.with(BackendCheckState::is_checking)
                    >
                        "Check again"
                    </button>
                    <a class="btn btn--muted" href="/">"Back to home"</a>
                </div>
            </section>
        </div>
    }
}
