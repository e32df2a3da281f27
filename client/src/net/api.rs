//! REST calls from the browser to the FlowPilot backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call returns `ApiError::Unavailable`; sections
//! only fetch from effects and click handlers, which never run on the server.
//!
//! ERROR HANDLING
//! ==============
//! Responses are classified by `contract::decode_response`, so a non-2xx
//! status or malformed JSON is a failure exactly like a dropped connection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use contract::{
    ApiError, Backend, BackendConfig, DashboardSummary, Endpoint, FormList, PricingResponse, SubmissionRequest,
    SubmissionResult, WorkflowList, decode_response,
};
use serde::de::DeserializeOwned;

/// `Backend` over the browser's fetch API.
///
/// Provided once through Leptos context by `App`; sections take it from there.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
    config: BackendConfig,
}

impl HttpBackend {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&SubmissionRequest>,
    ) -> Result<T, ApiError> {
        let (status, text) = self.exchange(endpoint, body).await?;
        decode_response(status, &text)
    }

    /// Send one request and return its status and raw body.
    async fn exchange(
        &self,
        endpoint: Endpoint<'_>,
        body: Option<&SubmissionRequest>,
    ) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use contract::Method;
            use gloo_net::http::Request;

            let url = self.config.url(endpoint);
            let query = endpoint.query();
            let builder = match endpoint.method() {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            }
            .query(query.iter().map(|(key, value)| (*key, value.as_str())));
            let response = match body {
                Some(body) => builder.json(body).map_err(network_error)?.send().await,
                None => builder.send().await,
            }
            .map_err(network_error)?;
            let status = response.status();
            let text = response.text().await.map_err(network_error)?;
            Ok((status, text))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, endpoint, body);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

impl Backend for HttpBackend {
    async fn pricing(&self) -> Result<PricingResponse, ApiError> {
        self.fetch_json(Endpoint::Pricing, None).await
    }

    async fn seed_templates(&self) -> Result<(), ApiError> {
        self.exchange(Endpoint::SeedTemplates, None).await?;
        Ok(())
    }

    async fn workflows(&self, category: &str) -> Result<WorkflowList, ApiError> {
        self.fetch_json(Endpoint::Workflows { category }, None).await
    }

    async fn forms(&self) -> Result<FormList, ApiError> {
        self.fetch_json(Endpoint::Forms, None).await
    }

    async fn create_submission(&self, request: &SubmissionRequest) -> Result<SubmissionResult, ApiError> {
        self.fetch_json(Endpoint::Submissions, Some(request)).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.fetch_json(Endpoint::DashboardSummary, None).await
    }
}
