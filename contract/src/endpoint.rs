//! Endpoint table and backend base-URL configuration.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Base URL used when nothing is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable naming the backend base URL.
pub const BACKEND_URL_ENV: &str = "FLOWPILOT_BACKEND_URL";

/// Category the template gallery seeds and lists.
pub const FINANCE_CATEGORY: &str = "Finance";

/// HTTP method of an [`Endpoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// The backend calls the landing page makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Pricing,
    SeedTemplates,
    Workflows { category: &'a str },
    Forms,
    Submissions,
    DashboardSummary,
}

impl Endpoint<'_> {
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::SeedTemplates | Self::Submissions => Method::Post,
            Self::Pricing | Self::Workflows { .. } | Self::Forms | Self::DashboardSummary => Method::Get,
        }
    }

    /// Path relative to the backend base URL, without the query string.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Pricing => "/pricing",
            Self::SeedTemplates => "/templates/seed",
            Self::Workflows { .. } => "/workflows",
            Self::Forms => "/forms",
            Self::Submissions => "/submissions",
            Self::DashboardSummary => "/dashboard/summary",
        }
    }

    /// Query parameters. HTTP clients encode these with their own builders.
    #[must_use]
    pub fn query(self) -> Vec<(&'static str, String)> {
        match self {
            Self::Workflows { category } => vec![("category", category.to_owned())],
            _ => Vec::new(),
        }
    }
}

/// Where the backend lives.
///
/// Constructed once and handed to whichever HTTP implementation needs it;
/// sections never read the environment themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BACKEND_URL.to_owned() }
    }
}

impl BackendConfig {
    /// Blank input falls back to [`DEFAULT_BACKEND_URL`]; trailing slashes are dropped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw: String = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { base_url: trimmed.to_owned() }
    }

    /// Read [`BACKEND_URL_ENV`] from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(std::env::var(BACKEND_URL_ENV).unwrap_or_default())
    }

    /// Read [`BACKEND_URL_ENV`] as it was when this crate was compiled.
    ///
    /// The browser bundle has no process environment, so the URL is fixed at
    /// build time there.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(option_env!("FLOWPILOT_BACKEND_URL").unwrap_or_default())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `endpoint`, without its query string.
    #[must_use]
    pub fn url(&self, endpoint: Endpoint<'_>) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}
