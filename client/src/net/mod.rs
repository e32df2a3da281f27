//! Networking for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the browser implementation of `contract::Backend`. Wire shapes
//! and the endpoint table live in the `contract` crate.

pub mod api;
