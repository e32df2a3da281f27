//! "Try it now" form: pick a backend-declared form, fill its fields, submit.
//!
//! INVARIANTS
//! ==========
//! - Draft keys are always a subset of the selected form's field keys.
//! - Changing the selection empties the draft.
//! - Nothing is submitted while no form is selected.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use contract::{ApiError, FormDefinition, FormList, SubmissionData, SubmissionRequest, SubmissionResult};

use super::request::{RequestSeq, RequestToken};

#[derive(Clone, Debug, Default)]
pub struct SubmitState {
    pub forms: Vec<FormDefinition>,
    pub selected: Option<String>,
    pub draft: SubmissionData,
    pub result: Option<SubmissionResult>,
    forms_seq: RequestSeq,
    submit_seq: RequestSeq,
}

impl SubmitState {
    pub fn begin_forms_load(&mut self) -> RequestToken {
        self.forms_seq.issue()
    }

    /// Replace the available forms. A selection that no longer exists is dropped.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; the previous list stays.
    pub fn apply_forms(&mut self, token: RequestToken, result: Result<FormList, ApiError>) -> Result<(), ApiError> {
        let list = result?;
        if !self.forms_seq.is_latest(token) {
            return Ok(());
        }
        self.forms = list.items;
        if self.selected_form().is_none() {
            self.clear_selection();
        }
        Ok(())
    }

    /// Select a form by id. Unknown or empty ids clear the selection.
    pub fn select(&mut self, form_id: &str) {
        let next = self.forms.iter().find(|form| form.id == form_id).map(|form| form.id.clone());
        if next != self.selected {
            self.draft.clear();
        }
        self.selected = next;
    }

    #[must_use]
    pub fn selected_form(&self) -> Option<&FormDefinition> {
        let selected = self.selected.as_deref()?;
        self.forms.iter().find(|form| form.id == selected)
    }

    /// Merge one edited field into the draft. Keys the selected form does not
    /// declare are ignored; returns whether the draft changed.
    pub fn set_field(&mut self, key: &str, value: String) -> bool {
        if !self.selected_form().is_some_and(|form| form.has_field(key)) {
            return false;
        }
        self.draft.insert(key.to_owned(), value);
        true
    }

    #[must_use]
    pub fn field_value(&self, key: &str) -> &str {
        self.draft.get(key).map_or("", String::as_str)
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    /// Body for `POST /submissions`, or `None` while nothing is selected.
    #[must_use]
    pub fn request(&self) -> Option<SubmissionRequest> {
        let form_id = self.selected.clone()?;
        Some(SubmissionRequest { form_id, data: self.draft.clone() })
    }

    /// Start a submission. `None` means no network call should be made.
    pub fn begin_submit(&mut self) -> Option<(RequestToken, SubmissionRequest)> {
        let request = self.request()?;
        Some((self.submit_seq.issue(), request))
    }

    /// Store the backend's answer, replacing any earlier result.
    ///
    /// # Errors
    ///
    /// Returns the submit error unchanged; the previous result stays.
    pub fn apply_result(
        &mut self,
        token: RequestToken,
        result: Result<SubmissionResult, ApiError>,
    ) -> Result<(), ApiError> {
        let submitted = result?;
        if self.submit_seq.is_latest(token) {
            self.result = Some(submitted);
        }
        Ok(())
    }

    /// `Submission: <id> • Status: <status>` once a submit has succeeded.
    #[must_use]
    pub fn result_line(&self) -> Option<String> {
        self.result.as_ref().map(ToString::to_string)
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.draft.clear();
    }
}
