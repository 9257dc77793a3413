//! Unified status vocabulary for consistent CLI output.
//!
//! `StatusKind` provides a single canonical set of status icons and
//! colors shared by the doctor report and the bootstrap renderer.

use super::theme::GangwayTheme;

/// Canonical status kinds used across all Gangway output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed or dependency resolved.
    Success,
    /// Check failed or dependency missing.
    Failed,
    /// Non-fatal warning (optional dependency missing, env var unset).
    Warning,
    /// Check skipped or not applicable.
    Skipped,
}

impl StatusKind {
    /// Unicode icon for TTY output.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Skipped => "○",
        }
    }

    /// Bracketed text for non-TTY output.
    pub fn bracketed(self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Failed => "[FAIL]",
            Self::Warning => "[warn]",
            Self::Skipped => "[skip]",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &GangwayTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Skipped => theme.dim.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &GangwayTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line for non-TTY: bracketed + message.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.bracketed(), msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_distinct() {
        let kinds = [
            StatusKind::Success,
            StatusKind::Failed,
            StatusKind::Warning,
            StatusKind::Skipped,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.icon(), b.icon());
                assert_ne!(a.bracketed(), b.bracketed());
            }
        }
    }

    #[test]
    fn format_plain_uses_brackets() {
        assert_eq!(
            StatusKind::Failed.format_plain("pandas"),
            "[FAIL] pandas"
        );
        assert_eq!(StatusKind::Success.format_plain("plotly"), "[ok] plotly");
    }

    #[test]
    fn format_with_plain_theme() {
        let theme = GangwayTheme::plain();
        assert_eq!(StatusKind::Warning.format(&theme, "optional"), "⚠ optional");
    }
}
