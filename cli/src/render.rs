//! Plain-text rendering of backend responses for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt::Write as _;

use contract::{DashboardSummary, FormList, PricingResponse, SubmissionResult, WorkflowList};

const HIGHLIGHTED_PLAN_INDEX: usize = 1;

pub fn summary(summary: &DashboardSummary) -> String {
    let totals = summary.totals;
    format!(
        "Forms        {}\nWorkflows    {}\nSubmissions  {}\n",
        totals.forms, totals.workflows, totals.submissions
    )
}

pub fn pricing(response: &PricingResponse) -> String {
    let mut out = String::new();
    for (i, plan) in response.plans.iter().enumerate() {
        let marker = if i == HIGHLIGHTED_PLAN_INDEX { " *" } else { "" };
        let _ = writeln!(out, "{}  ${}/mo{marker}", plan.name, plan.price_usd);
        for feature in &plan.features {
            let _ = writeln!(out, "  - {feature}");
        }
    }
    out
}

pub fn templates(list: &WorkflowList) -> String {
    if list.items.is_empty() {
        return "No templates yet. Run `templates seed` to add finance workflows.\n".to_owned();
    }
    let mut out = String::new();
    for template in &list.items {
        let _ = writeln!(out, "{}  ({})", template.name, template.id);
        if !template.description.is_empty() {
            let _ = writeln!(out, "  {}", template.description);
        }
        for step in &template.steps {
            let _ = writeln!(out, "  - {} • {}", step.name, step.kind);
        }
    }
    out
}

pub fn forms(list: &FormList) -> String {
    if list.items.is_empty() {
        return "No forms.\n".to_owned();
    }
    let mut out = String::new();
    for form in &list.items {
        let keys = form.fields.iter().map(|f| f.key.as_str()).collect::<Vec<_>>().join(", ");
        let _ = writeln!(out, "{}  {}  [{keys}]", form.id, form.name);
    }
    out
}

pub fn submission(result: &SubmissionResult) -> String {
    format!("{result}\n")
}
