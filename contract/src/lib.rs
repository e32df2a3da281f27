//! Shared HTTP contract between the FlowPilot landing client and its backend.
//!
//! This crate owns the JSON shapes of the six backend calls the landing page
//! makes, the endpoint table, the base-URL configuration and the single error
//! class the client acknowledges. It performs no I/O: the browser client
//! (`gloo-net`) and the CLI (`reqwest`) each implement [`Backend`] on top of it.

mod endpoint;
mod error;
mod types;

pub use endpoint::{BACKEND_URL_ENV, BackendConfig, DEFAULT_BACKEND_URL, Endpoint, FINANCE_CATEGORY, Method};
pub use error::{ApiError, decode_response, expect_success};
pub use types::{
    DashboardSummary, FieldSpec, FormDefinition, FormList, PlanRecord, PricingResponse, Step, SubmissionData,
    SubmissionRequest, SubmissionResult, Totals, WorkflowList, WorkflowTemplate,
};

/// One async method per backend call the landing page makes.
///
/// Implementations map transport failures, non-2xx statuses and malformed JSON
/// onto [`ApiError`]; callers decide whether to surface or swallow them.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// `GET /pricing`.
    async fn pricing(&self) -> Result<PricingResponse, ApiError>;

    /// `POST /templates/seed`. Any completed response counts as done: status
    /// and body are ignored, only transport failures are errors.
    async fn seed_templates(&self) -> Result<(), ApiError>;

    /// `GET /workflows?category=<category>`.
    async fn workflows(&self, category: &str) -> Result<WorkflowList, ApiError>;

    /// `GET /forms`.
    async fn forms(&self) -> Result<FormList, ApiError>;

    /// `POST /submissions`.
    async fn create_submission(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ApiError>;

    /// `GET /dashboard/summary`.
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;
}
