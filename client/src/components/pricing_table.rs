//! Pricing section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/pricing` once on mount and renders one card per plan in backend
//! order. An empty or failed fetch renders no cards and no placeholder.

use contract::Backend as _;
use leptos::prelude::*;

use crate::components::plan_card::PlanCard;
use crate::net::api::HttpBackend;
use crate::state::pricing::PricingState;
use crate::util::report;

#[component]
pub fn PricingTable() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let pricing = RwSignal::new(PricingState::default());

    Effect::new(move || {
        let Some(token) = pricing.try_update(PricingState::begin_load) else {
            return;
        };
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.pricing().await;
            report::swallow("pricing", pricing.try_update(|s| s.apply(token, result)));
        });
    });

    view! {
        <section class="pricing" id="pricing">
            <h2 class="section__title">"Simple, scalable pricing"</h2>
            <p class="section__subtitle">"Start free. Upgrade as your workflows grow."</p>
            <div class="pricing__grid">
                {move || {
                    pricing
                        .with(PricingState::cards)
                        .into_iter()
                        .map(|(plan, highlight)| view! { <PlanCard plan=plan highlight=highlight/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
