//! One workflow template tile.

use contract::WorkflowTemplate;
use leptos::prelude::*;

use crate::state::templates::step_label;

#[component]
pub fn TemplateCard(template: WorkflowTemplate) -> impl IntoView {
    let steps = template.steps.iter().map(step_label).collect::<Vec<_>>();
    view! {
        <div class="template-card">
            <h3 class="template-card__name">{template.name}</h3>
            <p class="template-card__description">{template.description}</p>
            <div class="template-card__steps">
                <div class="template-card__steps-label">"Steps"</div>
                <ul class="template-card__step-list">
                    {steps.into_iter().map(|label| view! { <li>{label}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
