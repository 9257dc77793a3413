//! Deployment environment variables.
//!
//! The launcher exports a fixed pair of variables for the delegated
//! application to read: a deployment-mode identifier and a boolean
//! force-live-backend flag. They are applied unconditionally at the start
//! of a launch, before any probing, and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Variable naming the active deployment mode.
pub const DEPLOY_MODE_VAR: &str = "GANGWAY_DEPLOY_MODE";

/// Variable telling the delegate to use its live backend instead of
/// canned demo data. String-encoded boolean ("true"/"false").
pub const FORCE_LIVE_VAR: &str = "GANGWAY_FORCE_LIVE";

/// Deployment environment settings from the manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployEnv {
    /// Deployment mode identifier exported to the delegate.
    pub mode: String,

    /// Whether the delegate should talk to its live backend. Cloud demo
    /// deployments default to canned data.
    pub force_live_backend: bool,
}

impl Default for DeployEnv {
    fn default() -> Self {
        Self {
            mode: "cloud-demo".to_string(),
            force_live_backend: false,
        }
    }
}

impl DeployEnv {
    /// The (name, value) pairs this configuration exports.
    pub fn vars(&self) -> [(&'static str, String); 2] {
        [
            (DEPLOY_MODE_VAR, self.mode.clone()),
            (
                FORCE_LIVE_VAR,
                if self.force_live_backend {
                    "true".to_string()
                } else {
                    "false".to_string()
                },
            ),
        ]
    }

    /// Apply the variables to the current process environment.
    ///
    /// Called once at the top of a launch; everything spawned afterwards
    /// (probes, the delegate) inherits them.
    pub fn apply(&self) {
        for (name, value) in self.vars() {
            tracing::debug!("setting {}={}", name, value);
            std::env::set_var(name, value);
        }
    }

    /// Snapshot the current process values of the exported variables.
    ///
    /// Used by the doctor to report what a delegate would observe.
    pub fn snapshot() -> [(&'static str, Option<String>); 2] {
        [
            (DEPLOY_MODE_VAR, std::env::var(DEPLOY_MODE_VAR).ok()),
            (FORCE_LIVE_VAR, std::env::var(FORCE_LIVE_VAR).ok()),
        ]
    }
}
