//! Console reporting for fetch failures the landing sections swallow.
//!
//! Sections never show an error banner; the failure only reaches the browser
//! console so a developer can still see why a section stayed empty.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use contract::ApiError;

/// Log a discarded fetch failure for `section`.
pub fn swallowed(section: &str, err: &ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{}", swallowed_message(section, err));
    #[cfg(not(feature = "hydrate"))]
    let _ = (section, err);
}

/// Log the error half of a state transition, if any.
pub fn swallow(section: &str, outcome: Option<Result<(), ApiError>>) {
    if let Some(Err(err)) = outcome {
        swallowed(section, &err);
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn swallowed_message(section: &str, err: &ApiError) -> String {
    format!("{section}: request failed, keeping previous state ({err})")
}
