//! Template gallery: seed finance templates on demand, then list them.
//!
//! SEQUENCING
//! ==========
//! The seed POST completes (or fails) before the list GET is issued, so a
//! freshly seeded set shows up in the list. The seed status is ignored; only a
//! POST that never got a response keeps the GET from being sent. The busy
//! flag clears whether or not either call succeeds.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use contract::{ApiError, Backend, FINANCE_CATEGORY, Step, WorkflowTemplate};

use super::request::{RequestSeq, RequestToken};

/// Shown in place of the grid while no templates are loaded.
pub const EMPTY_TEMPLATES_HINT: &str =
    "No templates yet. Click \"Seed templates\" to add finance workflows like Invoices, Expenses, and POs.";

#[derive(Clone, Debug, Default)]
pub struct TemplatesState {
    pub items: Vec<WorkflowTemplate>,
    /// A seed request is in flight; the seed control is disabled.
    pub busy: bool,
    /// At least one seed-then-list round trip has succeeded.
    pub seeded: bool,
    seq: RequestSeq,
}

impl TemplatesState {
    pub fn begin_seed(&mut self) -> RequestToken {
        self.busy = true;
        self.seq.issue()
    }

    /// Finish a seed round trip.
    ///
    /// Only the newest round trip touches state. It always clears `busy`; on
    /// success it replaces the list and marks the gallery seeded, on failure
    /// the list is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns the seed or list error unchanged.
    pub fn finish_seed(
        &mut self,
        token: RequestToken,
        result: Result<Vec<WorkflowTemplate>, ApiError>,
    ) -> Result<(), ApiError> {
        if !self.seq.is_latest(token) {
            return result.map(drop);
        }
        self.busy = false;
        self.items = result?;
        self.seeded = true;
        Ok(())
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.busy {
            "Seeding..."
        } else if self.seeded {
            "Reseed"
        } else {
            "Seed templates"
        }
    }

    #[must_use]
    pub fn show_placeholder(&self) -> bool {
        self.items.is_empty()
    }
}

/// Seed finance templates, then fetch the finance category.
///
/// # Errors
///
/// Returns the first failing call's error. A seed that got no response at all
/// skips the list call; one that got any HTTP status still lists.
pub async fn seed_finance_templates<B: Backend>(backend: &B) -> Result<Vec<WorkflowTemplate>, ApiError> {
    match backend.seed_templates().await {
        Ok(()) | Err(ApiError::Status(_)) => {}
        Err(err) => return Err(err),
    }
    let list = backend.workflows(FINANCE_CATEGORY).await?;
    Ok(list.items)
}

/// `Manager approval • approval`
#[must_use]
pub fn step_label(step: &Step) -> String {
    format!("{} • {}", step.name, step.kind)
}
