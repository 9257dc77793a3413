//! The probe sweep and its report.

use super::entry::ProbeEntry;
use super::prober::ModuleProber;

/// The recorded result of probing a single entry.
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    /// The entry that was probed.
    pub entry: ProbeEntry,
    /// Failure detail, `None` on success.
    pub error: Option<String>,
}

impl ProbeOutcome {
    /// A successful probe.
    pub fn success(entry: ProbeEntry) -> Self {
        Self { entry, error: None }
    }

    /// A failed probe with detail.
    pub fn failure(entry: ProbeEntry, detail: impl Into<String>) -> Self {
        Self {
            entry,
            error: Some(detail.into()),
        }
    }

    /// Whether the probe succeeded.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered probe results for one invocation.
///
/// Built once, immutable after construction. Order matches the input
/// entry order; classification queries are order-independent.
#[derive(Debug, Clone)]
pub struct ProbeReport {
    outcomes: Vec<ProbeOutcome>,
}

impl ProbeReport {
    /// Build a report from pre-computed outcomes.
    pub fn new(outcomes: Vec<ProbeOutcome>) -> Self {
        Self { outcomes }
    }

    /// Sweep all entries with the given prober.
    ///
    /// Probes run sequentially in input order. Each probe is isolated: a
    /// failure is recorded and the sweep continues.
    pub fn run(entries: Vec<ProbeEntry>, prober: &dyn ModuleProber) -> Self {
        let outcomes = entries
            .into_iter()
            .map(|entry| match prober.resolve(&entry.module) {
                Ok(()) => {
                    tracing::debug!(module = %entry.module, "probe ok");
                    ProbeOutcome::success(entry)
                }
                Err(detail) => {
                    tracing::debug!(module = %entry.module, %detail, "probe failed");
                    ProbeOutcome::failure(entry, detail)
                }
            })
            .collect();

        Self { outcomes }
    }

    /// All outcomes, in probe order.
    pub fn outcomes(&self) -> &[ProbeOutcome] {
        &self.outcomes
    }

    /// Number of probed entries.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether no entries were probed.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Failed critical entries, in probe order.
    pub fn failed_critical(&self) -> Vec<&ProbeOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded() && o.entry.is_critical())
            .collect()
    }

    /// Failed optional entries, in probe order.
    pub fn failed_optional(&self) -> Vec<&ProbeOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.succeeded() && !o.entry.is_critical())
            .collect()
    }

    /// Whether every probe succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(ProbeOutcome::succeeded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticProber;

    fn entries() -> Vec<ProbeEntry> {
        vec![
            ProbeEntry::new("pandas", "pandas"),
            ProbeEntry::new("plotly", "plotly"),
            ProbeEntry::new("langchain", "LangChain components"),
        ]
    }

    #[test]
    fn sweep_preserves_order() {
        let report = ProbeReport::run(entries(), &StaticProber::all_ok());
        let modules: Vec<_> = report
            .outcomes()
            .iter()
            .map(|o| o.entry.module.as_str())
            .collect();
        assert_eq!(modules, ["pandas", "plotly", "langchain"]);
    }

    #[test]
    fn sweep_continues_past_failures() {
        let prober = StaticProber::failing(&[("pandas", "gone")]);
        let report = ProbeReport::run(entries(), &prober);
        assert_eq!(report.len(), 3);
        assert!(!report.outcomes()[0].succeeded());
        assert!(report.outcomes()[1].succeeded());
        assert!(report.outcomes()[2].succeeded());
    }

    #[test]
    fn partitions_by_criticality() {
        let prober = StaticProber::failing(&[("pandas", "gone"), ("langchain", "gone")]);
        let report = ProbeReport::run(entries(), &prober);

        let critical: Vec<_> = report
            .failed_critical()
            .iter()
            .map(|o| o.entry.module.as_str())
            .collect();
        let optional: Vec<_> = report
            .failed_optional()
            .iter()
            .map(|o| o.entry.module.as_str())
            .collect();

        assert_eq!(critical, ["pandas"]);
        assert_eq!(optional, ["langchain"]);
    }

    #[test]
    fn partition_is_order_independent() {
        let prober = StaticProber::failing(&[("pandas", "gone")]);

        let forward = ProbeReport::run(entries(), &prober);
        let mut reversed_entries = entries();
        reversed_entries.reverse();
        let reversed = ProbeReport::run(reversed_entries, &prober);

        assert_eq!(
            forward.failed_critical().len(),
            reversed.failed_critical().len()
        );
        assert_eq!(
            forward.failed_optional().len(),
            reversed.failed_optional().len()
        );
    }

    #[test]
    fn all_succeeded_on_clean_sweep() {
        let report = ProbeReport::run(entries(), &StaticProber::all_ok());
        assert!(report.all_succeeded());
        assert!(report.failed_critical().is_empty());
        assert!(report.failed_optional().is_empty());
    }

    #[test]
    fn empty_report() {
        let report = ProbeReport::new(vec![]);
        assert!(report.is_empty());
        assert!(report.all_succeeded());
    }

    #[test]
    fn failure_detail_is_preserved() {
        let outcome = ProbeOutcome::failure(
            ProbeEntry::new("pandas", "pandas"),
            "No module named 'pandas'",
        );
        assert_eq!(outcome.error.as_deref(), Some("No module named 'pandas'"));
    }
}
