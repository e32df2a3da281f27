use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_backend_env() {
    unsafe {
        std::env::remove_var(BACKEND_URL_ENV);
    }
}

#[test]
fn endpoint_methods_match_contract() {
    assert_eq!(Endpoint::Pricing.method(), Method::Get);
    assert_eq!(Endpoint::SeedTemplates.method(), Method::Post);
    assert_eq!(Endpoint::Workflows { category: FINANCE_CATEGORY }.method(), Method::Get);
    assert_eq!(Endpoint::Forms.method(), Method::Get);
    assert_eq!(Endpoint::Submissions.method(), Method::Post);
    assert_eq!(Endpoint::DashboardSummary.method(), Method::Get);
}

#[test]
fn endpoint_paths_match_contract() {
    assert_eq!(Endpoint::Pricing.path(), "/pricing");
    assert_eq!(Endpoint::SeedTemplates.path(), "/templates/seed");
    assert_eq!(Endpoint::Workflows { category: "Finance" }.path(), "/workflows");
    assert_eq!(Endpoint::Forms.path(), "/forms");
    assert_eq!(Endpoint::Submissions.path(), "/submissions");
    assert_eq!(Endpoint::DashboardSummary.path(), "/dashboard/summary");
}

#[test]
fn only_workflows_carries_a_query() {
    assert_eq!(
        Endpoint::Workflows { category: "Finance" }.query(),
        vec![("category", "Finance".to_owned())]
    );
    assert!(Endpoint::Pricing.query().is_empty());
    assert!(Endpoint::Submissions.query().is_empty());
}

#[test]
fn backend_config_defaults_to_localhost() {
    assert_eq!(BackendConfig::default().base_url(), "http://localhost:8000");
    assert_eq!(BackendConfig::new("").base_url(), DEFAULT_BACKEND_URL);
    assert_eq!(BackendConfig::new("   ").base_url(), DEFAULT_BACKEND_URL);
}

#[test]
fn backend_config_trims_trailing_slashes() {
    let config = BackendConfig::new("https://api.flowpilot.test//");
    assert_eq!(config.base_url(), "https://api.flowpilot.test");
    assert_eq!(config.url(Endpoint::Forms), "https://api.flowpilot.test/forms");
}

#[test]
fn backend_config_url_omits_query() {
    let config = BackendConfig::default();
    assert_eq!(
        config.url(Endpoint::Workflows { category: "Finance" }),
        "http://localhost:8000/workflows"
    );
}

#[test]
fn from_env_reads_override_and_falls_back() {
    unsafe {
        clear_backend_env();
    }
    assert_eq!(BackendConfig::from_env(), BackendConfig::default());

    unsafe {
        std::env::set_var(BACKEND_URL_ENV, "http://backend.internal:9000/");
    }
    assert_eq!(BackendConfig::from_env().base_url(), "http://backend.internal:9000");

    unsafe { clear_backend_env() };
}
