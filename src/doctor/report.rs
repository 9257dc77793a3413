//! Doctor report types.

use serde::Serialize;
use std::path::PathBuf;

/// Result of checking the delegate interpreter.
#[derive(Debug, Clone, Serialize)]
pub struct InterpreterCheck {
    /// Interpreter from the manifest.
    pub interpreter: String,
    /// Whether the interpreter could be spawned.
    pub found: bool,
    /// Extracted version, when the interpreter reported one.
    pub version: Option<String>,
}

/// Result of checking one expected project path.
#[derive(Debug, Clone, Serialize)]
pub struct PathCheck {
    /// Path relative to the project root.
    pub path: PathBuf,
    /// Whether it exists.
    pub exists: bool,
}

/// Result of probing one dependency import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportCheck {
    /// Importable module name.
    pub module: String,
    /// Display label.
    pub label: String,
    /// Whether absence blocks the launch.
    pub critical: bool,
    /// Whether the import resolved.
    pub ok: bool,
    /// Failure detail, when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Observed value of one deployment environment variable.
#[derive(Debug, Clone, Serialize)]
pub struct EnvCheck {
    /// Variable name.
    pub name: String,
    /// Current value, `None` when unset.
    pub value: Option<String>,
}

/// The full diagnostic report for one invocation.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorReport {
    /// Interpreter availability and version.
    pub interpreter: InterpreterCheck,
    /// Project structure checks, in configured order.
    pub structure: Vec<PathCheck>,
    /// Dependency import checks, in manifest order.
    pub imports: Vec<ImportCheck>,
    /// Deployment variable snapshot (informational only).
    pub env: Vec<EnvCheck>,
}

impl DoctorReport {
    /// Overall result: everything a launch strictly needs is in place.
    ///
    /// Unset env vars and failed optional imports don't fail the report;
    /// the launcher sets the former itself and degrades on the latter.
    pub fn passed(&self) -> bool {
        self.interpreter.found
            && self.structure.iter().all(|c| c.exists)
            && self.imports.iter().all(|c| c.ok || !c.critical)
    }

    /// Serialize for `doctor --json`.
    pub fn to_json(&self) -> crate::error::Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::anyhow!(e).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passing_report() -> DoctorReport {
        DoctorReport {
            interpreter: InterpreterCheck {
                interpreter: "python3".to_string(),
                found: true,
                version: Some("3.11.4".to_string()),
            },
            structure: vec![PathCheck {
                path: "app/main.py".into(),
                exists: true,
            }],
            imports: vec![ImportCheck {
                module: "pandas".to_string(),
                label: "pandas".to_string(),
                critical: true,
                ok: true,
                detail: None,
            }],
            env: vec![EnvCheck {
                name: "GANGWAY_DEPLOY_MODE".to_string(),
                value: None,
            }],
        }
    }

    #[test]
    fn clean_report_passes() {
        assert!(passing_report().passed());
    }

    #[test]
    fn missing_interpreter_fails() {
        let mut report = passing_report();
        report.interpreter.found = false;
        assert!(!report.passed());
    }

    #[test]
    fn missing_path_fails() {
        let mut report = passing_report();
        report.structure[0].exists = false;
        assert!(!report.passed());
    }

    #[test]
    fn failed_critical_import_fails() {
        let mut report = passing_report();
        report.imports[0].ok = false;
        assert!(!report.passed());
    }

    #[test]
    fn failed_optional_import_still_passes() {
        let mut report = passing_report();
        report.imports.push(ImportCheck {
            module: "langchain".to_string(),
            label: "LangChain components".to_string(),
            critical: false,
            ok: false,
            detail: Some("No module named 'langchain'".to_string()),
        });
        assert!(report.passed());
    }

    #[test]
    fn unset_env_still_passes() {
        assert!(passing_report().passed());
    }

    #[test]
    fn json_round_trip_contains_fields() {
        let json = passing_report().to_json().unwrap();
        assert!(json.contains("\"interpreter\""));
        assert!(json.contains("\"structure\""));
        assert!(json.contains("\"imports\""));
        // detail: None is skipped entirely
        assert!(!json.contains("\"detail\""));
    }
}
