//! Launch manifest schema and loading.
//!
//! The manifest lives at `.gangway/manifest.yml` under the project root.
//! Every field has a default, and a project with no manifest at all gets
//! the compiled-in defaults, so the dependency and doctor lists behave as
//! fixed, enumerated configuration unless a project overrides them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::deploy_env::DeployEnv;
use crate::error::{GangwayError, Result};

/// Manifest location relative to the project root.
pub const MANIFEST_RELATIVE_PATH: &str = ".gangway/manifest.yml";

/// Root manifest structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Application name (for display purposes).
    pub app_name: String,

    /// The delegated application entry point.
    pub delegate: DelegateConfig,

    /// The runtime hosting the delegate.
    pub runtime: RuntimeConfig,

    /// Environment exported to the delegate.
    pub deploy: DeployEnv,

    /// Runtime modules the delegate needs, in probe order.
    pub dependencies: Vec<DependencyConfig>,

    /// Label prefixes marking a dependency as optional. Anything whose
    /// label matches none of these is critical.
    pub optional_markers: Vec<String>,

    /// Preflight diagnostics configuration.
    pub doctor: DoctorConfig,

    /// Content for the degraded preview.
    pub preview: PreviewConfig,

    /// Remediation pointers rendered on failure paths.
    pub remediation: RemediationConfig,
}

/// Delegate entry point configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelegateConfig {
    /// Entry file, relative to the project root. Must exist at launch time.
    pub path: PathBuf,

    /// Launch command, executed through the shell with the project root as
    /// working directory.
    pub command: String,
}

impl Default for DelegateConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("app/main.py"),
            command: "streamlit run app/main.py --server.port 8503 --server.headless true"
                .to_string(),
        }
    }
}

/// Runtime configuration for module probing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Interpreter used to resolve module imports.
    pub interpreter: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
        }
    }
}

/// One probed dependency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyConfig {
    /// Importable module name.
    pub module: String,

    /// Human-readable label; defaults to the module name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DependencyConfig {
    /// The display label for this dependency.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.module)
    }
}

/// Preflight diagnostics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoctorConfig {
    /// Relative paths that must exist for the delegate to load.
    pub paths: Vec<PathBuf>,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            paths: vec![
                PathBuf::from("app"),
                PathBuf::from("app/main.py"),
                PathBuf::from("requirements.txt"),
            ],
        }
    }
}

/// Content shown when only optional dependencies are missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Feature bullet points for the preview summary.
    pub features: Vec<String>,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            features: vec![
                "Interactive review dashboards with quality scoring".to_string(),
                "Dynamic form rendering with real-time validation".to_string(),
                "Multi-agent processing pipeline".to_string(),
            ],
        }
    }
}

/// Remediation pointers rendered on every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemediationConfig {
    /// Repository to clone for a local run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Command that installs the missing dependencies.
    pub install_command: String,

    /// URL where a local run is reachable.
    pub local_url: String,
}

impl Default for RemediationConfig {
    fn default() -> Self {
        Self {
            repository: None,
            install_command: "pip install -r requirements.txt".to_string(),
            local_url: "http://localhost:8503".to_string(),
        }
    }
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            app_name: "Demo application".to_string(),
            delegate: DelegateConfig::default(),
            runtime: RuntimeConfig::default(),
            deploy: DeployEnv::default(),
            dependencies: vec![
                DependencyConfig {
                    module: "pandas".to_string(),
                    label: None,
                },
                DependencyConfig {
                    module: "plotly".to_string(),
                    label: None,
                },
                DependencyConfig {
                    module: "langchain".to_string(),
                    label: Some("LangChain components".to_string()),
                },
            ],
            optional_markers: crate::probe::OPTIONAL_LABEL_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            doctor: DoctorConfig::default(),
            preview: PreviewConfig::default(),
            remediation: RemediationConfig::default(),
        }
    }
}

impl Manifest {
    /// Load the manifest for a project.
    ///
    /// An explicit path must exist; otherwise `.gangway/manifest.yml` under
    /// the project root is used when present, and the compiled-in defaults
    /// when not.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    return Err(GangwayError::ManifestNotFound {
                        path: p.to_path_buf(),
                    });
                }
                p.to_path_buf()
            }
            None => {
                let default_path = project_root.join(MANIFEST_RELATIVE_PATH);
                if !default_path.exists() {
                    tracing::debug!("no manifest file, using compiled-in defaults");
                    let manifest = Self::default();
                    manifest.validate()?;
                    return Ok(manifest);
                }
                default_path
            }
        };

        let content = fs::read_to_string(&path)?;
        let manifest: Manifest =
            serde_yaml::from_str(&content).map_err(|e| GangwayError::ManifestParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        manifest.validate()?;
        Ok(manifest)
    }

    /// Validate structural invariants the schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.dependencies.is_empty() {
            return Err(GangwayError::ManifestValidationError {
                message: "dependency list is empty".to_string(),
            });
        }
        if let Some(dep) = self.dependencies.iter().find(|d| d.module.trim().is_empty()) {
            return Err(GangwayError::ManifestValidationError {
                message: format!("dependency with blank module name (label: {:?})", dep.label),
            });
        }
        if self.delegate.path.as_os_str().is_empty() {
            return Err(GangwayError::ManifestValidationError {
                message: "delegate path is empty".to_string(),
            });
        }
        if self.delegate.command.trim().is_empty() {
            return Err(GangwayError::ManifestValidationError {
                message: "delegate command is empty".to_string(),
            });
        }
        if self.runtime.interpreter.trim().is_empty() {
            return Err(GangwayError::ManifestValidationError {
                message: "runtime interpreter is empty".to_string(),
            });
        }
        Ok(())
    }

    /// Probe entries derived from the dependency list, in manifest order.
    pub fn probe_entries(&self) -> Vec<crate::probe::ProbeEntry> {
        self.dependencies
            .iter()
            .map(|d| {
                crate::probe::ProbeEntry::with_markers(
                    &d.module,
                    d.label(),
                    &self.optional_markers,
                )
            })
            .collect()
    }
}
