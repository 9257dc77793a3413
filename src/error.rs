//! Error types for Gangway operations.
//!
//! This module defines [`GangwayError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GangwayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `GangwayError::Other`) for unexpected errors
//! - A failed dependency probe is *data*, not an error — it flows into the
//!   bootstrap decision instead of unwinding the stack
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Gangway operations.
#[derive(Debug, Error)]
pub enum GangwayError {
    /// Manifest file not found at an explicitly requested location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse the launch manifest.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParseError { path: PathBuf, message: String },

    /// Invalid manifest structure or values.
    #[error("Invalid manifest: {message}")]
    ManifestValidationError { message: String },

    /// The delegated entry file does not exist.
    #[error("Delegate entry file not found: {path}")]
    DelegateMissing { path: PathBuf },

    /// The delegated entry file was found but launching it failed.
    #[error("Delegate launch failed with exit code {code:?}: {command}")]
    DelegateFailed { command: String, code: Option<i32> },

    /// Shell command failed to spawn or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Gangway operations.
pub type Result<T> = std::result::Result<T, GangwayError>;
