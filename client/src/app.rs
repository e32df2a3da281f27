//! Root application component with routing and the backend context.

use contract::BackendConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::HttpBackend;
use crate::pages::{backend_check::BackendCheckPage, landing::LandingPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the backend configuration once and hands every section the same
/// `HttpBackend` through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(HttpBackend::new(BackendConfig::from_build_env()));

    view! {
        <Stylesheet id="leptos" href="/pkg/flowpilot.css"/>
        <Title text="FlowPilot | No-code workflow automation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("test") view=BackendCheckPage/>
            </Routes>
        </Router>
    }
}
