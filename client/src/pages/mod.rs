//! Route-level screens.
//!
//! `landing` is the marketing page at `/`; `backend_check` is the `/test`
//! diagnostics page linked from the hero.

pub mod backend_check;
pub mod landing;
