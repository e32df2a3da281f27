//! Marketing landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Composes static chrome with the four independent fetch-driven sections.
//! Sections share nothing but the injected `HttpBackend`, so a backend outage
//! empties sections without touching the static content.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::pricing_table::PricingTable;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::submission_form::SubmissionForm;
use crate::components::template_gallery::TemplateGallery;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <SiteHeader/>
            <Hero/>
            <TemplateGallery/>
            <SubmissionForm/>
            <PricingTable/>
            <SiteFooter/>
        </div>
    }
}
