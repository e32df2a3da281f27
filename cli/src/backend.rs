//! `contract::Backend` over `reqwest`.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use std::time::Duration;

use contract::{
    ApiError, Backend, BackendConfig, DashboardSummary, Endpoint, FormList, Method, PricingResponse,
    SubmissionRequest, SubmissionResult, WorkflowList, decode_response,
};

pub struct ReqwestBackend {
    client: reqwest::Client,
    config: BackendConfig,
}

impl ReqwestBackend {
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: BackendConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, config })
    }

    async fn exchange(&self, endpoint: Endpoint<'_>, body: Option<&SubmissionRequest>) -> Result<(u16, String), ApiError> {
        let method = match endpoint.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };
        let mut request = self.client.request(method, self.config.url(endpoint));
        let query = endpoint.query();
        if !query.is_empty() {
            request = request.query(&query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(network_error)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(network_error)?;
        Ok((status, text))
    }
}

fn network_error(err: reqwest::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

impl Backend for ReqwestBackend {
    async fn pricing(&self) -> Result<PricingResponse, ApiError> {
        let (status, text) = self.exchange(Endpoint::Pricing, None).await?;
        decode_response(status, &text)
    }

    async fn seed_templates(&self) -> Result<(), ApiError> {
        self.exchange(Endpoint::SeedTemplates, None).await?;
        Ok(())
    }

    async fn workflows(&self, category: &str) -> Result<WorkflowList, ApiError> {
        let (status, text) = self.exchange(Endpoint::Workflows { category }, None).await?;
        decode_response(status, &text)
    }

    async fn forms(&self) -> Result<FormList, ApiError> {
        let (status, text) = self.exchange(Endpoint::Forms, None).await?;
        decode_response(status, &text)
    }

    async fn create_submission(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ApiError> {
        let (status, text) = self.exchange(Endpoint::Submissions, Some(request)).await?;
        decode_response(status, &text)
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        let (status, text) = self.exchange(Endpoint::DashboardSummary, None).await?;
        decode_response(status, &text)
    }
}
