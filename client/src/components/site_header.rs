//! Sticky top bar with brand and section anchors.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    <span class="site-header__logo" aria-hidden="true">"◆"</span>
                    <span class="site-header__name">"FlowPilot"</span>
                </a>
                <nav class="site-header__nav">
                    <a href="/#templates">"Templates"</a>
                    <a href="/#submit">"Try"</a>
                    <a href="/#pricing">"Pricing"</a>
                </nav>
                <button class="btn site-header__launch">"Launch Studio"</button>
            </div>
        </header>
    }
}
