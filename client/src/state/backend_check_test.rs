use super::*;

#[test]
fn starts_idle() {
    let state = BackendCheckState::default();
    assert_eq!(state.status, CheckStatus::Idle);
    assert_eq!(state.status_line(), "Not checked yet.");
}

#[test]
fn begin_check_marks_checking() {
    let mut state = BackendCheckState::default();
    state.begin_check();
    assert!(state.is_checking());
    assert_eq!(state.status_line(), "Checking...");
}

#[test]
fn success_reports_totals() {
    let mut state = BackendCheckState::default();
    let token = state.begin_check();
    state.apply(token, Ok(DashboardSummary { totals: Totals { forms: 3, workflows: 5, submissions: 12 } }));
    assert_eq!(state.status_line(), "Connected. 3 forms, 5 workflows, 12 submissions.");
}

#[test]
fn failure_surfaces_reason() {
    let mut state = BackendCheckState::default();
    let token = state.begin_check();
    state.apply(token, Err(ApiError::Status(502)));
    assert_eq!(state.status, CheckStatus::Unreachable("backend returned HTTP 502".to_owned()));
    assert_eq!(state.status_line(), "Unreachable: backend returned HTTP 502");
}

#[test]
fn stale_probe_is_ignored() {
    let mut state = BackendCheckState::default();
    let older = state.begin_check();
    let newer = state.begin_check();
    state.apply(older, Err(ApiError::Status(500)));
    assert!(state.is_checking());
    state.apply(newer, Ok(DashboardSummary { totals: Totals::default() }));
    assert!(matches!(state.status, CheckStatus::Reachable(_)));
}
