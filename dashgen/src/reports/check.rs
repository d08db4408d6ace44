//! Check command report.

use std::path::PathBuf;

use dashgen_codegen::pipeline::{Diagnostic, Severity};
use serde::Serialize;

use super::output::{Output, Report};

/// Result of validating an interface.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub input: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
    /// Present when the interface resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CheckSummary>,
}

/// What a valid interface would generate.
#[derive(Debug, Serialize)]
pub struct CheckSummary {
    pub resource: String,
    pub output_root: String,
    pub field_count: usize,
    /// Indented schema tree.
    pub schema: String,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

/// `error: message` with an optional `--> location` line.
pub(crate) fn format_diagnostic(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}: {}\n  --> {}", diag.severity, diag.message, loc),
        None => format!("{}: {}", diag.severity, diag.message),
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            match diag.severity {
                Severity::Error | Severity::Warning => out.diagnostic(&format_diagnostic(diag)),
                Severity::Info => out.preformatted(&format_diagnostic(diag)),
            }
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        let Some(summary) = &self.summary else {
            return;
        };
        out.preformatted(&format!("✓ {} is valid", self.input.display()));
        out.newline();
        out.key_value("Resource", &summary.resource);
        out.key_value("Output", &format!("{}/{}", summary.output_root, summary.resource));
        out.newline();
        out.section(&format!("Fields ({})", summary.field_count));
        out.preformatted(summary.schema.trim_end());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_invalid_report_prints_errors_only() {
        let report = CheckReport {
            input: PathBuf::from("interface.json"),
            diagnostics: vec![
                Diagnostic::error("validate", "missing naming field")
                    .at("namingConvention.User_3_000___"),
            ],
            summary: None,
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(
            out.stderr,
            "error: missing naming field\n  --> namingConvention.User_3_000___\n"
        );
        assert!(!out.stdout.contains("is valid"));
    }

    #[test]
    fn test_json_skips_missing_summary() {
        let report = CheckReport {
            input: PathBuf::from("interface.json"),
            diagnostics: vec![Diagnostic::warning("validate", "schema is empty")],
            summary: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"input":"interface.json","diagnostics":[{"severity":"warning","phase":"validate","message":"schema is empty"}]}"#
        );
    }
}
