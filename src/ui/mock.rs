//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use gangway::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Probing dependencies");
//! ui.success("All dependencies resolved");
//!
//! assert!(ui.messages().iter().any(|m| m.contains("Probing")));
//! assert!(ui.successes().iter().any(|m| m.contains("resolved")));
//! ```

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions in ordered vectors.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    status_lines: Vec<(StatusKind, String)>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Captured status lines.
    pub fn status_lines(&self) -> &[(StatusKind, String)] {
        &self.status_lines
    }

    /// Captured spinner start messages.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// All captured output joined into one string, for contains-assertions.
    pub fn all_output(&self) -> String {
        let mut out = String::new();
        for group in [
            &self.messages,
            &self.successes,
            &self.warnings,
            &self.errors,
            &self.headers,
        ] {
            for line in group.iter() {
                out.push_str(line);
                out.push('\n');
            }
        }
        for (_, line) in &self.status_lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Spinner handle that records nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}
    fn finish_success(&mut self, _msg: &str) {}
    fn finish_error(&mut self, _msg: &str) {}
    fn finish_clear(&mut self) {}
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn status_line(&mut self, kind: StatusKind, msg: &str) {
        self.status_lines.push((kind, msg.to_string()));
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_captures_all_channels() {
        let mut ui = MockUI::new();
        ui.message("m");
        ui.success("s");
        ui.warning("w");
        ui.error("e");
        ui.show_header("h");
        ui.status_line(StatusKind::Failed, "pandas");

        assert_eq!(ui.messages(), &["m".to_string()]);
        assert_eq!(ui.successes(), &["s".to_string()]);
        assert_eq!(ui.warnings(), &["w".to_string()]);
        assert_eq!(ui.errors(), &["e".to_string()]);
        assert_eq!(ui.headers(), &["h".to_string()]);
        assert_eq!(ui.status_lines().len(), 1);
    }

    #[test]
    fn all_output_joins_channels() {
        let mut ui = MockUI::new();
        ui.message("first");
        ui.error("second");
        let out = ui.all_output();
        assert!(out.contains("first"));
        assert!(out.contains("second"));
    }

    #[test]
    fn spinner_messages_recorded() {
        let mut ui = MockUI::new();
        let mut handle = ui.start_spinner("probing");
        handle.finish_success("done");
        assert_eq!(ui.spinners(), &["probing".to_string()]);
    }
}
