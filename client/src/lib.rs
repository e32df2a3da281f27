//! # client
//!
//! Leptos + WASM frontend for the FlowPilot marketing site.
//!
//! Static marketing chrome plus four independent sections (summary, template
//! gallery, quick submit, pricing) that each fetch from the FlowPilot backend
//! and degrade to their empty state when it is unreachable.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
