use super::*;
use crate::state::fake_backend::FakeBackend;
use contract::{Backend, Totals};
use futures::executor::block_on;

fn summary_of(forms: u64, workflows: u64, submissions: u64) -> DashboardSummary {
    DashboardSummary { totals: Totals { forms, workflows, submissions } }
}

#[test]
fn stats_absent_before_any_fetch() {
    let state = SummaryState::default();
    assert_eq!(state.stats(), None);
}

#[test]
fn successful_fetch_shows_three_stats_in_order() {
    let backend = FakeBackend {
        summary: serde_json::from_str(r#"{"totals":{"forms":3,"workflows":5,"submissions":12}}"#)
            .map_err(contract::ApiError::from),
        ..FakeBackend::default()
    };
    let mut state = SummaryState::default();
    let token = state.begin_load();
    let result = block_on(backend.dashboard_summary());
    state.apply(token, result).expect("apply");

    assert_eq!(state.stats(), Some([("Forms", 3), ("Workflows", 5), ("Submissions", 12)]));
    assert_eq!(backend.calls(), vec!["GET /dashboard/summary"]);
}

#[test]
fn server_error_leaves_stats_absent_not_zeroed() {
    let backend = FakeBackend { summary: Err(ApiError::Status(500)), ..FakeBackend::default() };
    let mut state = SummaryState::default();
    let token = state.begin_load();
    let err = state.apply(token, block_on(backend.dashboard_summary())).expect_err("500");

    assert_eq!(err, ApiError::Status(500));
    assert_eq!(state.summary, None);
    assert_eq!(state.stats(), None);
}

#[test]
fn failure_keeps_previous_summary() {
    let mut state = SummaryState::default();
    let first = state.begin_load();
    state.apply(first, Ok(summary_of(1, 2, 3))).expect("apply");

    let second = state.begin_load();
    let _ = state.apply(second, Err(ApiError::Decode("eof".to_owned())));
    assert_eq!(state.summary, Some(summary_of(1, 2, 3)));
}

#[test]
fn stale_response_is_dropped() {
    let mut state = SummaryState::default();
    let older = state.begin_load();
    let newer = state.begin_load();

    state.apply(newer, Ok(summary_of(9, 9, 9))).expect("apply");
    state.apply(older, Ok(summary_of(1, 1, 1))).expect("stale apply is not an error");
    assert_eq!(state.summary, Some(summary_of(9, 9, 9)));
}
