//! Single labelled number in the hero summary.

use leptos::prelude::*;

#[component]
pub fn Stat(label: &'static str, value: u64) -> impl IntoView {
    view! {
        <div class="stat">
            <div class="stat__label">{label}</div>
            <div class="stat__value">{value.to_string()}</div>
        </div>
    }
}
