//! In-memory `Backend` with canned responses and a call log.

use std::cell::RefCell;

use contract::{
    ApiError, Backend, DashboardSummary, FormList, PricingResponse, SubmissionRequest, SubmissionResult,
    WorkflowList,
};

pub(crate) struct FakeBackend {
    pub calls: RefCell<Vec<String>>,
    pub submitted: RefCell<Vec<SubmissionRequest>>,
    pub pricing: Result<PricingResponse, ApiError>,
    pub seed: Result<(), ApiError>,
    pub workflows: Result<WorkflowList, ApiError>,
    pub forms: Result<FormList, ApiError>,
    pub submission: Result<SubmissionResult, ApiError>,
    pub summary: Result<DashboardSummary, ApiError>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            submitted: RefCell::new(Vec::new()),
            pricing: Ok(PricingResponse::default()),
            seed: Ok(()),
            workflows: Ok(WorkflowList::default()),
            forms: Ok(FormList::default()),
            submission: Err(ApiError::Status(500)),
            summary: Err(ApiError::Status(500)),
        }
    }
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl Backend for FakeBackend {
    async fn pricing(&self) -> Result<PricingResponse, ApiError> {
        self.record("GET /pricing");
        self.pricing.clone()
    }

    async fn seed_templates(&self) -> Result<(), ApiError> {
        self.record("POST /templates/seed");
        self.seed.clone()
    }

    async fn workflows(&self, category: &str) -> Result<WorkflowList, ApiError> {
        self.record(format!("GET /workflows?category={category}"));
        self.workflows.clone()
    }

    async fn forms(&self) -> Result<FormList, ApiError> {
        self.record("GET /forms");
        self.forms.clone()
    }

    async fn create_submission(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ApiError> {
        self.record("POST /submissions");
        self.submitted.borrow_mut().push(request.clone());
        self.submission.clone()
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.record("GET /dashboard/summary");
        self.summary.clone()
    }
}
