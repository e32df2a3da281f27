//! Connectivity probe behind the "Check backend" link.
//!
//! Unlike the landing sections, this page reports failures verbatim.

#[cfg(test)]
#[path = "backend_check_test.rs"]
mod backend_check_test;

use contract::{ApiError, DashboardSummary, Totals};

use super::request::{RequestSeq, RequestToken};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CheckStatus {
    #[default]
    Idle,
    Checking,
    Reachable(Totals),
    Unreachable(String),
}

#[derive(Clone, Debug, Default)]
pub struct BackendCheckState {
    pub status: CheckStatus,
    seq: RequestSeq,
}

impl BackendCheckState {
    pub fn begin_check(&mut self) -> RequestToken {
        self.status = CheckStatus::Checking;
        self.seq.issue()
    }

    pub fn apply(&mut self, token: RequestToken, result: Result<DashboardSummary, ApiError>) {
        if !self.seq.is_latest(token) {
            return;
        }
        self.status = match result {
            Ok(summary) => CheckStatus::Reachable(summary.totals),
            Err(err) => CheckStatus::Unreachable(err.to_string()),
        };
    }

    #[must_use]
    pub fn is_checking(&self) -> bool {
        self.status == CheckStatus::Checking
    }

    #[must_use]
    pub fn status_line(&self) -> String {
        match &self.status {
            CheckStatus::Idle => "Not checked yet.".to_owned(),
            CheckStatus::Checking => "Checking...".to_owned(),
            CheckStatus::Reachable(totals) => format!(
                "Connected. {} forms, {} workflows, {} submissions.",
                totals.forms, totals.workflows, totals.submissions
            ),
            CheckStatus::Unreachable(reason) => format!("Unreachable: {reason}"),
        }
    }
}
