//! The bootstrap plan and its decision function.

use crate::probe::{ProbeOutcome, ProbeReport};

/// A dependency that failed to resolve, as carried in plan payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingDependency {
    /// Human-readable label from the probe entry.
    pub label: String,
    /// Failure detail captured by the prober.
    pub detail: Option<String>,
}

impl From<&ProbeOutcome> for MissingDependency {
    fn from(outcome: &ProbeOutcome) -> Self {
        Self {
            label: outcome.entry.label.clone(),
            detail: outcome.error.clone(),
        }
    }
}

/// The three terminal bootstrap states.
///
/// Exactly one is chosen per invocation; there are no retries and no
/// re-probing. `Ready`'s payload is the launch itself, performed by
/// [`DelegateRunner`](crate::bootstrap::DelegateRunner); the other two
/// carry the failures their rendering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapPlan {
    /// Every dependency resolved; load and execute the delegate.
    Ready,

    /// Only optional dependencies failed; render the informational
    /// preview and take no further action.
    DegradedPreview { missing: Vec<MissingDependency> },

    /// At least one critical dependency failed; render the blocking
    /// message and halt.
    Blocked { failures: Vec<MissingDependency> },
}

impl BootstrapPlan {
    /// Short name for logs and dry-run output.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::DegradedPreview { .. } => "degraded-preview",
            Self::Blocked { .. } => "blocked",
        }
    }
}

/// Decide the bootstrap plan from a probe report.
///
/// Pure and total: any critical failure blocks, any remaining failure
/// degrades, a clean sweep is ready. Probe order cannot affect the
/// outcome.
pub fn decide(report: &ProbeReport) -> BootstrapPlan {
    let critical = report.failed_critical();
    if !critical.is_empty() {
        return BootstrapPlan::Blocked {
            failures: critical.into_iter().map(MissingDependency::from).collect(),
        };
    }

    let optional = report.failed_optional();
    if !optional.is_empty() {
        return BootstrapPlan::DegradedPreview {
            missing: optional.into_iter().map(MissingDependency::from).collect(),
        };
    }

    BootstrapPlan::Ready
}
