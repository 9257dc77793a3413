//! Launch command implementation.
//!
//! The `gangway launch` command is the deployment entry point: it applies
//! the deployment environment, sweeps the dependency probes, decides the
//! bootstrap plan, and either hands control to the delegate or renders
//! the fallback for the state it landed in.

use std::path::{Path, PathBuf};

use crate::bootstrap::{decide, render_delegate_failure, render_plan, BootstrapPlan, DelegateRunner};
use crate::cli::args::LaunchArgs;
use crate::config::Manifest;
use crate::error::{GangwayError, Result};
use crate::probe::{InterpreterProber, ProbeReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The launch command implementation.
pub struct LaunchCommand {
    project_root: PathBuf,
    manifest_path: Option<PathBuf>,
    args: LaunchArgs,
}

impl LaunchCommand {
    /// Create a new launch command.
    pub fn new(project_root: &Path, manifest_path: Option<PathBuf>, args: LaunchArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            manifest_path,
            args,
        }
    }
}

impl Command for LaunchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut manifest = Manifest::load(&self.project_root, self.manifest_path.as_deref())?;
        if self.args.live {
            manifest.deploy.force_live_backend = true;
        }

        // Exported before anything else runs; probes and the delegate
        // both inherit these.
        manifest.deploy.apply();

        ui.show_header(&manifest.app_name);

        let mut spinner = ui.start_spinner("Probing dependencies");
        let prober = InterpreterProber::new(&manifest.runtime.interpreter, &self.project_root);
        let report = ProbeReport::run(manifest.probe_entries(), &prober);
        if report.all_succeeded() {
            spinner.finish_success(&format!("{} dependencies resolved", report.len()));
        } else {
            // The plan renderer names the failures
            spinner.finish_clear();
        }

        let plan = decide(&report);
        tracing::debug!(plan = plan.name(), "bootstrap decision");

        if self.args.dry_run {
            render_plan(&plan, &manifest, ui);
            ui.message("");
            ui.message(&format!("Dry run: would enter the '{}' state", plan.name()));
            return Ok(match plan {
                BootstrapPlan::Blocked { .. } => CommandResult::failure(1),
                _ => CommandResult::success(),
            });
        }

        match plan {
            BootstrapPlan::Ready => {
                render_plan(&BootstrapPlan::Ready, &manifest, ui);
                let runner = DelegateRunner::new(&manifest, &self.project_root);
                match runner.launch() {
                    Ok(()) => Ok(CommandResult::success()),
                    Err(
                        err @ (GangwayError::DelegateMissing { .. }
                        | GangwayError::DelegateFailed { .. }),
                    ) => {
                        render_delegate_failure(&err, &manifest, ui);
                        Ok(CommandResult::failure(1))
                    }
                    Err(other) => Err(other),
                }
            }
            plan @ BootstrapPlan::DegradedPreview { .. } => {
                render_plan(&plan, &manifest, ui);
                Ok(CommandResult::success())
            }
            plan @ BootstrapPlan::Blocked { .. } => {
                render_plan(&plan, &manifest, ui);
                Ok(CommandResult::failure(1))
            }
        }
    }
}
