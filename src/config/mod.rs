//! Launch manifest and deployment environment.
//!
//! The manifest describes everything the launcher needs to know about the
//! delegated application: where its entry file lives, how to start it,
//! which runtime modules it needs, and what to tell the user when those
//! are missing. When no manifest file exists, a compiled-in default is
//! used so the tool works with zero configuration.

pub mod deploy_env;
pub mod manifest;

pub use deploy_env::{DeployEnv, DEPLOY_MODE_VAR, FORCE_LIVE_VAR};
pub use manifest::{
    DelegateConfig, DependencyConfig, DoctorConfig, Manifest, PreviewConfig, RemediationConfig,
    RuntimeConfig, MANIFEST_RELATIVE_PATH,
};
