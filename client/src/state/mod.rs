//! View state for the landing-page sections.
//!
//! DESIGN
//! ======
//! Each section owns one state struct and nothing crosses section boundaries.
//! Structs are plain data with begin/apply transitions so the fetch-driven
//! flows can be exercised without a browser; components wrap them in
//! `RwSignal`s.

pub mod backend_check;
pub mod pricing;
pub mod request;
pub mod submit;
pub mod summary;
pub mod templates;

#[cfg(test)]
pub(crate) mod fake_backend;
