//! Rendering boundary for bootstrap outcomes.
//!
//! Everything here formats a plan payload into user-facing messages with
//! remediation pointers. No decisions are made at this layer, and no
//! failure path ever surfaces a raw stack trace.

use crate::config::Manifest;
use crate::error::GangwayError;
use crate::ui::{StatusKind, UserInterface};

use super::plan::{BootstrapPlan, MissingDependency};

/// Render the chosen plan.
///
/// `Ready` renders a one-line confirmation; the launch itself is the
/// caller's job. The other two states render their full payload and are
/// terminal for this invocation.
pub fn render_plan(plan: &BootstrapPlan, manifest: &Manifest, ui: &mut dyn UserInterface) {
    match plan {
        BootstrapPlan::Ready => {
            ui.success("All dependencies resolved");
        }
        BootstrapPlan::DegradedPreview { missing } => {
            render_degraded_preview(missing, manifest, ui);
        }
        BootstrapPlan::Blocked { failures } => {
            render_blocked(failures, manifest, ui);
        }
    }
}

fn render_degraded_preview(
    missing: &[MissingDependency],
    manifest: &Manifest,
    ui: &mut dyn UserInterface,
) {
    ui.show_header(&format!("{} - Demo Preview", manifest.app_name));

    ui.warning("Optional components are not available in this deployment:");
    for dep in missing {
        ui.status_line(StatusKind::Warning, &describe(dep));
    }
    ui.message("");
    ui.message("The full interactive demo works when run locally.");

    if !manifest.preview.features.is_empty() {
        ui.message("");
        ui.message("What the full demo includes:");
        for feature in &manifest.preview.features {
            ui.message(&format!("  - {}", feature));
        }
    }

    render_local_run(manifest, ui);
}

fn render_blocked(
    failures: &[MissingDependency],
    manifest: &Manifest,
    ui: &mut dyn UserInterface,
) {
    ui.error("Critical dependencies missing");
    for dep in failures {
        ui.status_line(StatusKind::Failed, &describe(dep));
    }
    ui.message("");
    ui.message("Essential components failed to resolve; the application cannot start.");

    render_local_run(manifest, ui);
}

/// Render the delegate-failure fallback.
///
/// This is the second fallback layer inside the `Ready` path: the launch
/// was attempted and went wrong. A missing entry file and a failed
/// command get distinct leading messages, followed by the same local-run
/// remediation.
pub fn render_delegate_failure(
    err: &GangwayError,
    manifest: &Manifest,
    ui: &mut dyn UserInterface,
) {
    match err {
        GangwayError::DelegateMissing { path } => {
            ui.error(&format!(
                "The main application file `{}` was not found",
                path.display()
            ));
        }
        GangwayError::DelegateFailed { code, .. } => match code {
            Some(code) => {
                ui.error(&format!(
                    "There was an issue starting the application (exit code {})",
                    code
                ));
            }
            None => {
                ui.error("There was an issue starting the application");
            }
        },
        other => {
            ui.error(&format!("There was an issue starting the application: {}", other));
        }
    }

    render_local_run(manifest, ui);
}

/// The shared remediation block: clone, install, run, and where to look.
fn render_local_run(manifest: &Manifest, ui: &mut dyn UserInterface) {
    ui.message("");
    ui.message("To run the full version locally:");
    if let Some(repository) = &manifest.remediation.repository {
        ui.message(&format!("  git clone {}", repository));
    }
    ui.message(&format!("  {}", manifest.remediation.install_command));
    ui.message(&format!("  {}", manifest.delegate.command));
    ui.message("");
    ui.message(&format!("Local URL: {}", manifest.remediation.local_url));
    if let Some(repository) = &manifest.remediation.repository {
        ui.message(&format!("Repository: {}", repository));
    }
}

fn describe(dep: &MissingDependency) -> String {
    match &dep.detail {
        Some(detail) => format!("{}: {}", dep.label, detail),
        None => dep.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn manifest() -> Manifest {
        let mut manifest = Manifest::default();
        manifest.app_name = "Example Demo".to_string();
        manifest.remediation.repository =
            Some("https://github.com/example/example-demo.git".to_string());
        manifest
    }

    fn missing(label: &str, detail: Option<&str>) -> MissingDependency {
        MissingDependency {
            label: label.to_string(),
            detail: detail.map(String::from),
        }
    }

    #[test]
    fn ready_renders_confirmation_only() {
        let mut ui = MockUI::new();
        render_plan(&BootstrapPlan::Ready, &manifest(), &mut ui);
        assert_eq!(ui.successes().len(), 1);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn degraded_preview_lists_missing_and_features() {
        let mut ui = MockUI::new();
        let plan = BootstrapPlan::DegradedPreview {
            missing: vec![missing("LangChain components", None)],
        };
        render_plan(&plan, &manifest(), &mut ui);

        let out = ui.all_output();
        assert!(out.contains("Demo Preview"));
        assert!(out.contains("LangChain components"));
        assert!(out.contains("works when run locally"));
        assert!(out.contains("Interactive review dashboards"));
        assert!(out.contains("git clone"));
        assert!(out.contains("http://localhost:8503"));
    }

    #[test]
    fn blocked_names_failures_with_detail() {
        let mut ui = MockUI::new();
        let plan = BootstrapPlan::Blocked {
            failures: vec![missing("pandas", Some("No module named 'pandas'"))],
        };
        render_plan(&plan, &manifest(), &mut ui);

        let out = ui.all_output();
        assert!(out.contains("Critical dependencies missing"));
        assert!(out.contains("pandas: No module named 'pandas'"));
        assert!(out.contains("pip install -r requirements.txt"));
    }

    #[test]
    fn delegate_missing_renders_file_not_found() {
        let mut ui = MockUI::new();
        let err = GangwayError::DelegateMissing {
            path: "app/main.py".into(),
        };
        render_delegate_failure(&err, &manifest(), &mut ui);

        let out = ui.all_output();
        assert!(out.contains("app/main.py"));
        assert!(out.contains("was not found"));
        assert!(out.contains("Local URL"));
    }

    #[test]
    fn delegate_failed_renders_exit_code() {
        let mut ui = MockUI::new();
        let err = GangwayError::DelegateFailed {
            command: "streamlit run app/main.py".to_string(),
            code: Some(2),
        };
        render_delegate_failure(&err, &manifest(), &mut ui);

        let out = ui.all_output();
        assert!(out.contains("exit code 2"));
        assert!(out.contains("To run the full version locally"));
    }

    #[test]
    fn no_repository_omits_clone_line() {
        let mut ui = MockUI::new();
        let mut manifest = manifest();
        manifest.remediation.repository = None;
        let plan = BootstrapPlan::Blocked {
            failures: vec![missing("pandas", None)],
        };
        render_plan(&plan, &manifest, &mut ui);

        assert!(!ui.all_output().contains("git clone"));
    }
}
