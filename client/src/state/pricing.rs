//! Pricing cards.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

use contract::{ApiError, PlanRecord, PricingResponse};

use super::request::{RequestSeq, RequestToken};

/// Card at this position is visually highlighted. Positional, not data-driven.
pub const HIGHLIGHTED_PLAN_INDEX: usize = 1;

/// A plan ready for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: String,
    pub price: f64,
    pub features: Vec<String>,
}

impl From<PlanRecord> for Plan {
    fn from(record: PlanRecord) -> Self {
        Self { name: record.name, price: record.price_usd, features: record.features }
    }
}

impl Plan {
    /// `$29`, `$12.5`: integral prices print without a fraction.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PricingState {
    pub plans: Vec<Plan>,
    seq: RequestSeq,
}

impl PricingState {
    pub fn begin_load(&mut self) -> RequestToken {
        self.seq.issue()
    }

    /// Replace the plan list on success, preserving backend order.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; the previous plans stay.
    pub fn apply(&mut self, token: RequestToken, result: Result<PricingResponse, ApiError>) -> Result<(), ApiError> {
        let response = result?;
        if self.seq.is_latest(token) {
            self.plans = response.plans.into_iter().map(Plan::from).collect();
        }
        Ok(())
    }

    /// One entry per card with its highlight flag.
    #[must_use]
    pub fn cards(&self) -> Vec<(Plan, bool)> {
        self.plans
            .iter()
            .enumerate()
            .map(|(index, plan)| (plan.clone(), is_highlighted(index)))
            .collect()
    }
}

#[must_use]
pub fn is_highlighted(index: usize) -> bool {
    index == HIGHLIGHTED_PLAN_INDEX
}
