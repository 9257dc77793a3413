//! Probe entries and criticality classification.

/// Label prefixes marking a dependency as optional.
///
/// Optional dependencies gate enhancement layers (agent orchestration,
/// LLM tooling) rather than the core render path; their absence degrades
/// the deployment to a preview instead of blocking it. Classification is
/// purely name-based so reordering entries can never change the outcome.
pub const OPTIONAL_LABEL_MARKERS: &[&str] = &["LangChain"];

/// Whether a dependency's absence blocks the launch or merely degrades it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// Absence blocks all further operation.
    Critical,
    /// Absence downgrades the launch to a degraded preview.
    Optional,
}

impl Criticality {
    /// Classify a label against a marker list.
    ///
    /// A label is optional iff it starts with one of the markers.
    pub fn classify<M: AsRef<str>>(label: &str, markers: &[M]) -> Self {
        if markers.iter().any(|m| label.starts_with(m.as_ref())) {
            Criticality::Optional
        } else {
            Criticality::Critical
        }
    }
}

/// One (module, label) pair checked for importability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeEntry {
    /// Importable module name.
    pub module: String,
    /// Human-readable label used in all rendered output.
    pub label: String,
    /// Classification derived from the label.
    pub criticality: Criticality,
}

impl ProbeEntry {
    /// Create an entry classified with the built-in marker list.
    pub fn new(module: &str, label: &str) -> Self {
        Self::with_markers(module, label, OPTIONAL_LABEL_MARKERS)
    }

    /// Create an entry classified with a custom marker list.
    pub fn with_markers<M: AsRef<str>>(module: &str, label: &str, markers: &[M]) -> Self {
        Self {
            module: module.to_string(),
            label: label.to_string(),
            criticality: Criticality::classify(label, markers),
        }
    }

    /// Whether this entry's absence blocks the launch.
    pub fn is_critical(&self) -> bool {
        self.criticality == Criticality::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_labels_are_critical() {
        assert_eq!(
            Criticality::classify("pandas", OPTIONAL_LABEL_MARKERS),
            Criticality::Critical
        );
        assert_eq!(
            Criticality::classify("plotly", OPTIONAL_LABEL_MARKERS),
            Criticality::Critical
        );
    }

    #[test]
    fn marker_prefix_is_optional() {
        assert_eq!(
            Criticality::classify("LangChain components", OPTIONAL_LABEL_MARKERS),
            Criticality::Optional
        );
    }

    #[test]
    fn marker_must_be_a_prefix() {
        // The marker appearing mid-label does not count
        assert_eq!(
            Criticality::classify("core LangChain glue", OPTIONAL_LABEL_MARKERS),
            Criticality::Critical
        );
    }

    #[test]
    fn custom_markers_override_builtin() {
        let markers = ["Telemetry"];
        assert_eq!(
            Criticality::classify("Telemetry exporter", &markers),
            Criticality::Optional
        );
        assert_eq!(
            Criticality::classify("LangChain components", &markers),
            Criticality::Critical
        );
    }

    #[test]
    fn entry_new_classifies() {
        let entry = ProbeEntry::new("langchain", "LangChain components");
        assert!(!entry.is_critical());

        let entry = ProbeEntry::new("pandas", "pandas");
        assert!(entry.is_critical());
    }
}
