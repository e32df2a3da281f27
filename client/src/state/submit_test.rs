use super::*;
use crate::state::fake_backend::FakeBackend;
use contract::Backend;
use futures::executor::block_on;

const FORMS_JSON: &str = r#"{"items":[
    {"id":"f1","name":"Expense","fields":[{"key":"amount","label":"Amount"}]},
    {"id":"f2","name":"Purchase order","fields":[{"key":"a","label":"A"},{"key":"b","label":"B"}]}
]}"#;

fn loaded() -> SubmitState {
    let mut state = SubmitState::default();
    let token = state.begin_forms_load();
    let forms = serde_json::from_str(FORMS_JSON).map_err(ApiError::from);
    state.apply_forms(token, forms).expect("forms");
    state
}

fn submit_with(state: &mut SubmitState, backend: &FakeBackend) -> Option<Result<(), ApiError>> {
    let (token, request) = state.begin_submit()?;
    let result = block_on(backend.create_submission(&request));
    Some(state.apply_result(token, result))
}

#[test]
fn end_to_end_expense_submission() {
    let backend = FakeBackend {
        forms: serde_json::from_str(FORMS_JSON).map_err(ApiError::from),
        submission: serde_json::from_str(r#"{"id":"s1","status":"pending"}"#).map_err(ApiError::from),
        ..FakeBackend::default()
    };
    let mut state = SubmitState::default();
    let token = state.begin_forms_load();
    state.apply_forms(token, block_on(backend.forms())).expect("forms");

    state.select("f1");
    assert!(state.set_field("amount", "42".to_owned()));
    submit_with(&mut state, &backend).expect("submitted").expect("ok");

    let sent = backend.submitted.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        serde_json::to_value(&sent[0]).expect("json"),
        serde_json::json!({ "form_id": "f1", "data": { "amount": "42" } })
    );
    assert_eq!(state.result_line().as_deref(), Some("Submission: s1 • Status: pending"));
}

#[test]
fn editing_one_field_merges_into_draft() {
    let mut state = loaded();
    state.select("f2");
    state.set_field("b", "kept".to_owned());
    state.set_field("a", "first".to_owned());
    state.set_field("a", "second".to_owned());

    assert_eq!(state.field_value("a"), "second");
    assert_eq!(state.field_value("b"), "kept");
    assert_eq!(state.draft.len(), 2);
}

#[test]
fn keys_outside_selected_form_are_ignored() {
    let mut state = loaded();
    state.select("f2");
    assert!(!state.set_field("amount", "42".to_owned()));
    assert!(state.draft.keys().all(|key| key == "a" || key == "b"));
    assert!(state.draft.is_empty());
}

#[test]
fn fields_cannot_be_set_without_selection() {
    let mut state = loaded();
    assert!(!state.set_field("amount", "42".to_owned()));
    assert!(state.draft.is_empty());
}

#[test]
fn switching_forms_clears_previous_draft() {
    let mut state = loaded();
    state.select("f2");
    state.set_field("a", "leftover".to_owned());

    state.select("f1");
    assert!(state.draft.is_empty());
    let request = state.request().expect("selected");
    assert_eq!(request.form_id, "f1");
    assert!(request.data.is_empty());
}

#[test]
fn reselecting_same_form_keeps_draft() {
    let mut state = loaded();
    state.select("f1");
    state.set_field("amount", "42".to_owned());
    state.select("f1");
    assert_eq!(state.field_value("amount"), "42");
}

#[test]
fn placeholder_or_unknown_id_clears_selection() {
    let mut state = loaded();
    state.select("f1");
    state.set_field("amount", "42".to_owned());

    state.select("");
    assert_eq!(state.selected, None);
    assert!(state.draft.is_empty());

    state.select("missing");
    assert_eq!(state.selected, None);
    assert!(state.selected_form().is_none());
}

#[test]
fn submit_without_selection_makes_no_call_and_keeps_result() {
    let backend = FakeBackend::default();
    let previous = SubmissionResult { id: "s0".to_owned(), status: "approved".to_owned() };
    let mut state = SubmitState { result: Some(previous.clone()), ..loaded() };

    assert!(!state.can_submit());
    assert!(submit_with(&mut state, &backend).is_none());
    assert!(backend.calls().is_empty());
    assert_eq!(state.result, Some(previous));
}

#[test]
fn failed_submit_keeps_previous_result() {
    let backend = FakeBackend { submission: Err(ApiError::Status(422)), ..FakeBackend::default() };
    let previous = SubmissionResult { id: "s0".to_owned(), status: "approved".to_owned() };
    let mut state = SubmitState { result: Some(previous.clone()), ..loaded() };
    state.select("f1");

    let outcome = submit_with(&mut state, &backend).expect("call made");
    assert_eq!(outcome, Err(ApiError::Status(422)));
    assert_eq!(state.result, Some(previous));
}

#[test]
fn new_result_replaces_previous() {
    let mut state = loaded();
    state.select("f1");
    let (first, _) = state.begin_submit().expect("selected");
    state
        .apply_result(first, Ok(SubmissionResult { id: "s1".to_owned(), status: "pending".to_owned() }))
        .expect("apply");
    let (second, _) = state.begin_submit().expect("selected");
    state
        .apply_result(second, Ok(SubmissionResult { id: "s2".to_owned(), status: "approved".to_owned() }))
        .expect("apply");
    assert_eq!(state.result_line().as_deref(), Some("Submission: s2 • Status: approved"));
}

#[test]
fn late_response_from_older_submit_is_dropped() {
    let mut state = loaded();
    state.select("f1");
    let (older, _) = state.begin_submit().expect("selected");
    let (newer, _) = state.begin_submit().expect("selected");

    state
        .apply_result(newer, Ok(SubmissionResult { id: "s2".to_owned(), status: "pending".to_owned() }))
        .expect("apply");
    state
        .apply_result(older, Ok(SubmissionResult { id: "s1".to_owned(), status: "pending".to_owned() }))
        .expect("stale");
    assert_eq!(state.result.as_ref().map(|r| r.id.as_str()), Some("s2"));
}

#[test]
fn reloaded_forms_drop_vanished_selection() {
    let mut state = loaded();
    state.select("f2");
    state.set_field("a", "x".to_owned());

    let token = state.begin_forms_load();
    let only_f1 = serde_json::from_str(r#"{"items":[{"id":"f1","name":"Expense","fields":[]}]}"#)
        .map_err(ApiError::from);
    state.apply_forms(token, only_f1).expect("forms");

    assert_eq!(state.selected, None);
    assert!(state.draft.is_empty());
}

#[test]
fn failed_forms_fetch_keeps_empty_list() {
    let mut state = SubmitState::default();
    let token = state.begin_forms_load();
    let err = state.apply_forms(token, Err(ApiError::Network("offline".to_owned()))).expect_err("fail");
    assert!(matches!(err, ApiError::Network(_)));
    assert!(state.forms.is_empty());
}
