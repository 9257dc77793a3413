//! Delegate launch.

use std::path::Path;

use crate::config::Manifest;
use crate::error::GangwayError;
use crate::shell::{execute, CommandOptions};

/// Launches the delegated application.
///
/// The entry file must exist before the launch command runs; a missing
/// file and a failing command are distinct errors so the renderer can
/// show the right remediation for each.
pub struct DelegateRunner<'a> {
    manifest: &'a Manifest,
    project_root: &'a Path,
}

impl<'a> DelegateRunner<'a> {
    /// Create a runner for the given manifest and project root.
    pub fn new(manifest: &'a Manifest, project_root: &'a Path) -> Self {
        Self {
            manifest,
            project_root,
        }
    }

    /// Launch the delegate, blocking until it exits.
    ///
    /// The launch command runs through the shell with the project root as
    /// working directory and inherited stdio, so the delegate owns the
    /// terminal for its lifetime.
    ///
    /// # Errors
    ///
    /// [`GangwayError::DelegateMissing`] if the entry file does not exist;
    /// [`GangwayError::DelegateFailed`] if the command cannot be spawned
    /// or exits nonzero.
    pub fn launch(&self) -> crate::error::Result<()> {
        let entry_file = self.project_root.join(&self.manifest.delegate.path);
        if !entry_file.is_file() {
            return Err(GangwayError::DelegateMissing {
                path: self.manifest.delegate.path.clone(),
            });
        }

        let command = &self.manifest.delegate.command;
        tracing::info!(%command, "launching delegate");

        let options = CommandOptions {
            cwd: Some(self.project_root.to_path_buf()),
            ..CommandOptions::inherited()
        };

        let result = execute(command, &options).map_err(|_| GangwayError::DelegateFailed {
            command: command.clone(),
            code: None,
        })?;

        if result.success {
            Ok(())
        } else {
            Err(GangwayError::DelegateFailed {
                command: command.clone(),
                code: result.exit_code,
            })
        }
    }
}
