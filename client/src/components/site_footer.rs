//! Copyright footer.
//!
//! The year comes from the browser clock once hydrated. The server render
//! leaves it out so both renders start from the same markup.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

pub fn footer_line(year: Option<u32>) -> String {
    match year {
        Some(year) => format!("© {year} FlowPilot — Built for SMEs"),
        None => "© FlowPilot — Built for SMEs".to_owned(),
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = RwSignal::new(None::<u32>);
    Effect::new(move || year.set(current_year()));

    view! { <footer class="site-footer">{move || footer_line(year.get())}</footer> }
}

#[cfg(feature = "hydrate")]
fn current_year() -> Option<u32> {
    Some(js_sys::Date::new_0().get_full_year())
}

#[cfg(not(feature = "hydrate"))]
fn current_year() -> Option<u32> {
    None
}
