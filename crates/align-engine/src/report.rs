//! Per-plan error aggregation and the run report.

use std::collections::BTreeSet;

use align_core::fields::PlanId;
use serde::Serialize;

use crate::error::{AreaError, RestoreError};

/// Failures collected while writing one plan's items.
///
/// Holds no state across plans: [`PlanErrors::emit`] logs and drains it.
#[derive(Debug, Default)]
pub struct PlanErrors {
    failures: Vec<String>,
    bad_areas: BTreeSet<String>,
}

/// What [`PlanErrors::emit`] drained.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DrainedErrors {
    pub failures: Vec<String>,
    pub bad_areas: Vec<String>,
}

impl PlanErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_restore(&mut self, error: &RestoreError) {
        self.failures.push(error.to_string());
    }

    pub fn record_area(&mut self, error: &AreaError) {
        self.failures.push(error.to_string());
        if let Some(path) = &error.attempted {
            self.bad_areas.insert(path.clone());
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty() && self.bad_areas.is_empty()
    }

    #[must_use]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    #[must_use]
    pub const fn bad_areas(&self) -> &BTreeSet<String> {
        &self.bad_areas
    }

    /// Log the collected failures and distinct bad area paths for `plan`,
    /// then clear both collections.
    pub fn emit(&mut self, plan: &str) -> DrainedErrors {
        if !self.failures.is_empty() {
            tracing::warn!(
                plan,
                count = self.failures.len(),
                "Errors encountered in alignment for Test Plan \"{plan}\":\n{}",
                self.failures.join("\n")
            );
        }
        if !self.bad_areas.is_empty() {
            let areas: Vec<&str> = self.bad_areas.iter().map(String::as_str).collect();
            tracing::warn!(
                plan,
                count = areas.len(),
                "Area paths that could not be assigned in Test Plan \"{plan}\":\n{}",
                areas.join("\n")
            );
        }

        DrainedErrors {
            failures: std::mem::take(&mut self.failures),
            bad_areas: std::mem::take(&mut self.bad_areas).into_iter().collect(),
        }
    }
}

/// Outcome of the write phase for one plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOutcome {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub records: usize,
    pub restored: usize,
    pub areas_updated: usize,
    pub failures: Vec<String>,
    pub bad_areas: Vec<String>,
}

/// Outcome of the whole write phase, plans in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentReport {
    pub plans: Vec<PlanOutcome>,
}

impl AlignmentReport {
    #[must_use]
    pub fn total_records(&self) -> usize {
        self.plans.iter().map(|plan| plan.records).sum()
    }

    #[must_use]
    pub fn total_failures(&self) -> usize {
        self.plans.iter().map(|plan| plan.failures.len()).sum()
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.plans
            .iter()
            .all(|plan| plan.failures.is_empty() && plan.bad_areas.is_empty())
    }
}
