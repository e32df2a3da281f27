//! One pricing card.

use leptos::prelude::*;

use crate::state::pricing::Plan;

#[component]
pub fn PlanCard(plan: Plan, #[prop(optional)] highlight: bool) -> impl IntoView {
    let price = plan.price_label();
    view! {
        <div class="plan-card" class:plan-card--highlight=highlight>
            <h3 class="plan-card__name">{plan.name}</h3>
            <div class="plan-card__price">
                <span class="plan-card__amount">{price}</span>
                <span class="plan-card__period">"/mo"</span>
            </div>
            <ul class="plan-card__features">
                {plan
                    .features
                    .into_iter()
                    .map(|feature| view! { <li class="plan-card__feature">"✓ " {feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <button class="btn plan-card__cta" class:btn--primary=highlight>
                "Get started"
            </button>
        </div>
    }
}
