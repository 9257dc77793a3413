//! Platform-specific shell detection.

use std::path::PathBuf;

/// Resolve the shell executable used for launch commands.
///
/// Respects `$SHELL` on Unix and `%COMSPEC%` on Windows, with
/// conservative fallbacks.
pub fn shell_executable() -> PathBuf {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("cmd.exe"))
    } else {
        std::env::var("SHELL")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/bin/sh"))
    }
}

/// The flag that makes the shell execute a command string.
pub fn shell_flag(shell: &std::path::Path) -> &'static str {
    let name = shell
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    if name == "cmd" {
        "/C"
    } else {
        "-c"
    }
}

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive output in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn shell_executable_is_non_empty() {
        assert!(!shell_executable().as_os_str().is_empty());
    }

    #[test]
    fn shell_flag_for_posix_shells() {
        assert_eq!(shell_flag(Path::new("/bin/bash")), "-c");
        assert_eq!(shell_flag(Path::new("/usr/bin/zsh")), "-c");
        assert_eq!(shell_flag(Path::new("/bin/sh")), "-c");
    }

    #[test]
    fn shell_flag_for_cmd() {
        assert_eq!(shell_flag(Path::new("cmd.exe")), "/C");
    }

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }
}
