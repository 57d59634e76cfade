//! Rendering of mapping failures.
//!
//! The pipeline surfaces typed errors; embedding tools decide how to show
//! them. This module provides the plain-terminal rendering: root cause
//! first, then the data that conflicts, then what the user can do about
//! it.

use std::fmt;
use std::path::PathBuf;

/// How severe a rendered message is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// An actionable account of a mapping failure.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    headline: String,
    project: Option<PathBuf>,
    notes: Vec<String>,
    fixes: Vec<String>,
}

impl Diagnostic {
    pub fn error(headline: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, headline)
    }

    pub fn warning(headline: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, headline)
    }

    fn with_severity(severity: Severity, headline: impl Into<String>) -> Self {
        Diagnostic {
            severity,
            headline: headline.into(),
            project: None,
            notes: Vec::new(),
            fixes: Vec::new(),
        }
    }

    /// Attach the project the failure was detected in.
    pub fn in_project(mut self, path: impl Into<PathBuf>) -> Self {
        self.project = Some(path.into());
        self
    }

    /// Add a line explaining the conflicting data.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a suggested fix.
    pub fn fix(mut self, fix: impl Into<String>) -> Self {
        self.fixes.push(fix.into());
        self
    }

    /// Render for terminal output.
    pub fn render(&self, color: bool) -> String {
        let label = match (self.severity, color) {
            (Severity::Error, true) => "\x1b[1;31merror\x1b[0m",
            (Severity::Error, false) => "error",
            (Severity::Warning, true) => "\x1b[1;33mwarning\x1b[0m",
            (Severity::Warning, false) => "warning",
        };

        let mut out = format!("{label}: {}\n", self.headline);
        if let Some(project) = &self.project {
            out.push_str(&format!("  --> {}\n", project.display()));
        }
        for note in &self.notes {
            out.push_str(&format!("  note: {note}\n"));
        }
        for fix in &self.fixes {
            out.push_str(&format!("  help: {fix}\n"));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_is_cause_then_data_then_fixes() {
        let diagnostic = Diagnostic::error("unresolved dependency `Core`")
            .in_project("/ws/A")
            .note("`Core` is not a target of any project in the workspace")
            .fix("add the missing project to the workspace");

        let rendered = diagnostic.render(false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "error: unresolved dependency `Core`");
        assert_eq!(lines[1], "  --> /ws/A");
        assert!(lines[2].starts_with("  note:"));
        assert!(lines[3].starts_with("  help:"));
    }

    #[test]
    fn test_warning_label() {
        let rendered = Diagnostic::warning("duplicate project reference").render(false);
        assert!(rendered.starts_with("warning:"));
    }

    #[test]
    fn test_color_wraps_only_the_label() {
        let rendered = Diagnostic::error("boom").render(true);
        assert!(rendered.starts_with("\x1b[1;31merror\x1b[0m: boom"));
    }
}
