//! Module resolution against the delegate runtime.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shell::{execute_program, CommandOptions};

/// Resolves one importable name against the delegate runtime.
///
/// The trait seam exists so the bootstrap decision path can be exercised
/// in tests without spawning interpreters.
pub trait ModuleProber {
    /// Attempt to resolve `module`. `Err` carries the human-readable
    /// failure detail; it is captured as data by the sweep, never
    /// propagated.
    fn resolve(&self, module: &str) -> Result<(), String>;
}

/// Probes by spawning the configured interpreter.
///
/// `<interpreter> -c "import <module>"` is the same resolution the
/// delegate performs at startup, so a probe success means the delegate's
/// own import will succeed. The interpreter is spawned directly (no
/// shell) with the project root as working directory, so a relative
/// interpreter path in the manifest resolves against the project.
pub struct InterpreterProber {
    interpreter: String,
    project_root: PathBuf,
}

impl InterpreterProber {
    /// Create a prober for the given interpreter and project root.
    pub fn new(interpreter: &str, project_root: &Path) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            project_root: project_root.to_path_buf(),
        }
    }
}

impl ModuleProber for InterpreterProber {
    fn resolve(&self, module: &str) -> Result<(), String> {
        let statement = format!("import {}", module);
        let options = CommandOptions {
            cwd: Some(self.project_root.clone()),
            ..CommandOptions::captured()
        };

        let result = execute_program(&self.interpreter, &["-c", &statement], &options)
            .map_err(|_| format!("interpreter '{}' could not be spawned", self.interpreter))?;

        if result.success {
            Ok(())
        } else {
            Err(import_failure_detail(&result.stderr, result.exit_code))
        }
    }
}

/// Extract the most useful line from interpreter stderr.
///
/// Import errors end with a single summary line ("ModuleNotFoundError:
/// No module named 'x'"); the preceding traceback is noise here.
fn import_failure_detail(stderr: &str, exit_code: Option<i32>) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("import failed with exit code {:?}", exit_code))
}

/// Prober with predetermined outcomes, for tests and dry runs.
///
/// Modules listed in the failure map resolve to their detail string;
/// everything else succeeds.
#[derive(Debug, Default)]
pub struct StaticProber {
    failures: HashMap<String, String>,
}

impl StaticProber {
    /// A prober where every module resolves.
    pub fn all_ok() -> Self {
        Self::default()
    }

    /// A prober where the given modules fail with the given detail.
    pub fn failing(failures: &[(&str, &str)]) -> Self {
        Self {
            failures: failures
                .iter()
                .map(|(m, d)| (m.to_string(), d.to_string()))
                .collect(),
        }
    }
}

impl ModuleProber for StaticProber {
    fn resolve(&self, module: &str) -> Result<(), String> {
        match self.failures.get(module) {
            Some(detail) => Err(detail.clone()),
            None => Ok(()),
        }
    }
}
