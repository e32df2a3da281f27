//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The four fetch-driven sections (`summary_panel`, `template_gallery`,
//! `submission_form`, `pricing_table`) each own a private `RwSignal` of their
//! state. The rest is static marketing chrome.

pub mod hero;
pub mod plan_card;
pub mod pricing_table;
pub mod site_footer;
pub mod site_header;
pub mod stat;
pub mod submission_form;
pub mod summary_panel;
pub mod template_card;
pub mod template_gallery;
