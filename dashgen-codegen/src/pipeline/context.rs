//! Compilation context passed through pipeline phases.

use dashgen_manifest::Interface;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};
use crate::schema::ResolvedInterface;

/// State carried through the pipeline.
#[derive(Debug)]
pub struct CompilationContext {
    /// The parsed input.
    pub interface: Interface,
    /// Populated by the resolve phase.
    pub resolved: Option<ResolvedInterface>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(interface: Interface) -> Self {
        Self {
            interface,
            resolved: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the resolved interface out of the context.
    pub fn take_resolved(&mut self) -> Result<ResolvedInterface> {
        self.resolved
            .take()
            .ok_or_else(|| eyre!("interface not resolved - did the resolve phase run?"))
    }
}
