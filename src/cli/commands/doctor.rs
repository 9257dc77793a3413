//! Doctor command implementation.
//!
//! The `gangway doctor` command renders the preflight diagnostic report
//! and maps the overall result to exit code 0/1.

use std::path::{Path, PathBuf};

use crate::cli::args::DoctorArgs;
use crate::config::Manifest;
use crate::doctor::{run_doctor, DoctorReport};
use crate::error::Result;
use crate::probe::InterpreterProber;
use crate::ui::{StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The doctor command implementation.
pub struct DoctorCommand {
    project_root: PathBuf,
    manifest_path: Option<PathBuf>,
    args: DoctorArgs,
}

impl DoctorCommand {
    /// Create a new doctor command.
    pub fn new(project_root: &Path, manifest_path: Option<PathBuf>, args: DoctorArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest_path,
            args,
        }
    }
}

impl Command for DoctorCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manifest = Manifest::load(&self.project_root, self.manifest_path.as_deref())?;
        let prober = InterpreterProber::new(&manifest.runtime.interpreter, &self.project_root);
        let report = run_doctor(&manifest, &self.project_root, &prober);

        if self.args.json {
            // Machine output bypasses the UI so it stays parseable in
            // quiet mode and under redirection.
            println!("{}", report.to_json()?);
        } else {
            render_report(&manifest, &report, ui);
        }

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

fn render_report(manifest: &Manifest, report: &DoctorReport, ui: &mut dyn UserInterface) {
    ui.show_header(&format!("{} - Preflight Diagnostics", manifest.app_name));

    ui.message("Runtime:");
    let check = &report.interpreter;
    if check.found {
        let line = match &check.version {
            Some(version) => format!("{} ({})", check.interpreter, version),
            None => check.interpreter.clone(),
        };
        ui.status_line(StatusKind::Success, &line);
    } else {
        ui.status_line(
            StatusKind::Failed,
            &format!("{} not found", check.interpreter),
        );
    }

    ui.message("");
    ui.message("Project structure:");
    for check in &report.structure {
        if check.exists {
            ui.status_line(StatusKind::Success, &check.path.display().to_string());
        } else {
            ui.status_line(
                StatusKind::Failed,
                &format!("{} - missing", check.path.display()),
            );
        }
    }

    ui.message("");
    ui.message("Dependencies:");
    for check in &report.imports {
        if check.ok {
            ui.status_line(StatusKind::Success, &check.label);
        } else {
            let line = match &check.detail {
                Some(detail) => format!("{}: {}", check.label, detail),
                None => check.label.clone(),
            };
            let kind = if check.critical {
                StatusKind::Failed
            } else {
                StatusKind::Warning
            };
            ui.status_line(kind, &line);
        }
    }

    ui.message("");
    ui.message("Environment:");
    for check in &report.env {
        match &check.value {
            Some(value) => {
                ui.status_line(StatusKind::Success, &format!("{}={}", check.name, value));
            }
            None => {
                ui.status_line(
                    StatusKind::Skipped,
                    &format!("{} not set (launch exports it)", check.name),
                );
            }
        }
    }

    ui.message("");
    if report.passed() {
        ui.success("All preflight checks passed");
        ui.message("Run `gangway launch` to start the application");
    } else {
        ui.error("Preflight issues detected");
        render_hints(manifest, report, ui);
    }
}

/// Remediation hints for whatever actually failed.
fn render_hints(manifest: &Manifest, report: &DoctorReport, ui: &mut dyn UserInterface) {
    if !report.interpreter.found {
        ui.message(&format!(
            "  Install {} or point runtime.interpreter at an existing one",
            report.interpreter.interpreter
        ));
    }
    if report.structure.iter().any(|c| !c.exists) {
        ui.message("  Project files are missing; fetch the full source tree");
        if let Some(repository) = &manifest.remediation.repository {
            ui.message(&format!("  git clone {}", repository));
        }
    }
    if report.imports.iter().any(|c| !c.ok && c.critical) {
        ui.message(&format!("  {}", manifest.remediation.install_command));
    }
}
