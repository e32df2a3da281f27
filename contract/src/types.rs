//! JSON bodies exchanged with the backend.
//!
//! DESIGN
//! ======
//! List fields default to empty when the backend omits them, so a partially
//! populated record still renders. Scalar identity fields stay required: a
//! body missing them is a malformed response, not an empty one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field key -> entered text for a pending submission.
pub type SubmissionData = BTreeMap<String, String>;

/// Body of `GET /pricing`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingResponse {
    #[serde(default)]
    pub plans: Vec<PlanRecord>,
}

/// A plan as the backend describes it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub name: String,
    /// Monthly price in US dollars.
    pub price_usd: f64,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Body of `GET /workflows`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowList {
    #[serde(default)]
    pub items: Vec<WorkflowTemplate>,
}

/// A seeded workflow template. Read-only on the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One stage of a workflow template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    /// Backend-defined step type (e.g. `"approval"`); opaque to the client.
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Body of `GET /forms`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormList {
    #[serde(default)]
    pub items: Vec<FormDefinition>,
}

/// A backend-declared form schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormDefinition {
    /// Whether `key` names one of this form's fields.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.iter().any(|field| field.key == key)
    }
}

/// A single text input declared by a form. Values are always opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub key: String,
    #[serde(default)]
    pub label: String,
}

/// Body of `POST /submissions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    pub form_id: String,
    pub data: SubmissionData,
}

/// Response of `POST /submissions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub id: String,
    pub status: String,
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Submission: {} • Status: {}", self.id, self.status)
    }
}

/// Body of `GET /dashboard/summary`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub totals: Totals,
}

/// Aggregate counts shown in the hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub forms: u64,
    pub workflows: u64,
    pub submissions: u64,
}
