//! Finance workflow templates with an on-demand seed action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing is fetched on mount. The seed button runs the seed-then-list round
//! trip from `state::templates` and is disabled while it is in flight.

use leptos::prelude::*;

use crate::components::template_card::TemplateCard;
use crate::net::api::HttpBackend;
use crate::state::templates::{EMPTY_TEMPLATES_HINT, TemplatesState, seed_finance_templates};
use crate::util::report;

#[component]
pub fn TemplateGallery() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let templates = RwSignal::new(TemplatesState::default());

    let on_seed = move |_| {
        let Some(token) = templates.try_update(TemplatesState::begin_seed) else {
            return;
        };
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = seed_finance_templates(&backend).await;
            report::swallow("templates", templates.try_update(|s| s.finish_seed(token, result)));
        });
    };

    view! {
        <section class="templates" id="templates">
            <div class="templates__header">
                <h2 class="section__title">"Pre-built finance workflows"</h2>
                <button
                    class="btn btn--primary templates__seed"
                    on:click=on_seed
                    disabled=move || templates.with(|s| s.busy)
                >
                    {move || templates.with(TemplatesState::button_label)}
                </button>
            </div>
            <div class="templates__grid">
                {move || {
                    templates
                        .with(|s| s.items.clone())
                        .into_iter()
                        .map(|template| view! { <TemplateCard template=template/> })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || templates.with(TemplatesState::show_placeholder)>
                    <p class="templates__empty">{EMPTY_TEMPLATES_HINT}</p>
                </Show>
            </div>
        </section>
    }
}
