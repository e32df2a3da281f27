//! Dashboard totals shown in the hero.
//!
//! Fetched once on mount. A failed fetch leaves the panel absent rather than
//! zeroed.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use contract::{ApiError, DashboardSummary};

use super::request::{RequestSeq, RequestToken};

#[derive(Clone, Debug, Default)]
pub struct SummaryState {
    pub summary: Option<DashboardSummary>,
    seq: RequestSeq,
}

impl SummaryState {
    pub fn begin_load(&mut self) -> RequestToken {
        self.seq.issue()
    }

    /// Store a successful response. Failures are handed back for logging and
    /// leave the previous value in place.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged.
    pub fn apply(&mut self, token: RequestToken, result: Result<DashboardSummary, ApiError>) -> Result<(), ApiError> {
        let summary = result?;
        if self.seq.is_latest(token) {
            self.summary = Some(summary);
        }
        Ok(())
    }

    /// Labelled totals in display order, or `None` until a fetch succeeds.
    #[must_use]
    pub fn stats(&self) -> Option<[(&'static str, u64); 3]> {
        self.summary.map(|summary| {
            let totals = summary.totals;
            [("Forms", totals.forms), ("Workflows", totals.workflows), ("Submissions", totals.submissions)]
        })
    }
}
