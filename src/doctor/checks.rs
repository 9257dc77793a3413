//! Doctor check execution.

use regex::Regex;
use std::path::Path;

use crate::config::{DeployEnv, Manifest};
use crate::probe::{ModuleProber, ProbeReport};
use crate::shell::{execute_program, CommandOptions};

use super::report::{DoctorReport, EnvCheck, ImportCheck, InterpreterCheck, PathCheck};

/// Run all diagnostic checks for a project.
///
/// Checks run sequentially and never abort each other; the report carries
/// every result. The prober is injected so tests can run without a real
/// interpreter.
pub fn run_doctor(
    manifest: &Manifest,
    project_root: &Path,
    prober: &dyn ModuleProber,
) -> DoctorReport {
    let interpreter = check_interpreter(&manifest.runtime.interpreter, project_root);
    let structure = check_structure(manifest, project_root);
    let imports = check_imports(manifest, prober);
    let env = check_env();

    DoctorReport {
        interpreter,
        structure,
        imports,
        env,
    }
}

/// Spawn the interpreter with `--version` and extract a version number.
fn check_interpreter(interpreter: &str, project_root: &Path) -> InterpreterCheck {
    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        ..CommandOptions::captured()
    };

    match execute_program(interpreter, &["--version"], &options) {
        Ok(result) if result.success => {
            // Some interpreters print the banner to stderr
            let combined = format!("{}{}", result.stdout, result.stderr);
            InterpreterCheck {
                interpreter: interpreter.to_string(),
                found: true,
                version: extract_version(&combined),
            }
        }
        _ => InterpreterCheck {
            interpreter: interpreter.to_string(),
            found: false,
            version: None,
        },
    }
}

fn check_structure(manifest: &Manifest, project_root: &Path) -> Vec<PathCheck> {
    manifest
        .doctor
        .paths
        .iter()
        .map(|path| PathCheck {
            path: path.clone(),
            exists: project_root.join(path).exists(),
        })
        .collect()
}

fn check_imports(manifest: &Manifest, prober: &dyn ModuleProber) -> Vec<ImportCheck> {
    let report = ProbeReport::run(manifest.probe_entries(), prober);
    report
        .outcomes()
        .iter()
        .map(|o| ImportCheck {
            module: o.entry.module.clone(),
            label: o.entry.label.clone(),
            critical: o.entry.is_critical(),
            ok: o.succeeded(),
            detail: o.error.clone(),
        })
        .collect()
}

fn check_env() -> Vec<EnvCheck> {
    DeployEnv::snapshot()
        .into_iter()
        .map(|(name, value)| EnvCheck {
            name: name.to_string(),
            value,
        })
        .collect()
}

/// Pull the first dotted version number out of interpreter output.
pub fn extract_version(output: &str) -> Option<String> {
    let re = Regex::new(r"\d+\.\d+(?:\.\d+)?").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::StaticProber;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn extract_version_from_banner() {
        assert_eq!(
            extract_version("Python 3.11.4").as_deref(),
            Some("3.11.4")
        );
        assert_eq!(extract_version("v2.7").as_deref(), Some("2.7"));
        assert_eq!(extract_version("no digits here"), None);
    }

    #[test]
    fn structure_check_reflects_filesystem() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        fs::write(temp.path().join("app/main.py"), "").unwrap();
        // requirements.txt deliberately absent

        let manifest = Manifest::default();
        let checks = check_structure(&manifest, temp.path());

        let by_path = |p: &str| {
            checks
                .iter()
                .find(|c| c.path.to_str() == Some(p))
                .unwrap()
                .exists
        };
        assert!(by_path("app"));
        assert!(by_path("app/main.py"));
        assert!(!by_path("requirements.txt"));
    }

    #[test]
    fn import_checks_carry_criticality() {
        let manifest = Manifest::default();
        let prober = StaticProber::failing(&[("langchain", "No module named 'langchain'")]);
        let checks = check_imports(&manifest, &prober);

        let langchain = checks.iter().find(|c| c.module == "langchain").unwrap();
        assert!(!langchain.critical);
        assert!(!langchain.ok);
        assert_eq!(
            langchain.detail.as_deref(),
            Some("No module named 'langchain'")
        );

        let pandas = checks.iter().find(|c| c.module == "pandas").unwrap();
        assert!(pandas.critical);
        assert!(pandas.ok);
    }

    #[test]
    fn missing_interpreter_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        let check = check_interpreter("no-such-interpreter-gw", temp.path());
        assert!(!check.found);
        assert!(check.version.is_none());
    }

    #[cfg(unix)]
    #[test]
    fn full_doctor_run_with_stub_interpreter() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("app")).unwrap();
        fs::write(temp.path().join("app/main.py"), "").unwrap();
        fs::write(temp.path().join("requirements.txt"), "pandas\n").unwrap();

        let stub = temp.path().join("stub-python");
        fs::write(&stub, "#!/bin/sh\necho 'Python 3.11.4'\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let mut manifest = Manifest::default();
        manifest.runtime.interpreter = stub.to_str().unwrap().to_string();

        let report = run_doctor(&manifest, temp.path(), &StaticProber::all_ok());
        assert!(report.passed());
        assert_eq!(report.interpreter.version.as_deref(), Some("3.11.4"));
        assert_eq!(report.env.len(), 2);
    }
}
