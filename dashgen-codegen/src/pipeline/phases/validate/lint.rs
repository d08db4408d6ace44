//! Lint trait for interface validation.

use dashgen_manifest::Interface;

use crate::pipeline::Diagnostic;

/// A lint that checks the interface for issues.
pub trait Lint: Send + Sync {
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the interface and add any diagnostics.
    fn check(&self, interface: &Interface, diagnostics: &mut Vec<Diagnostic>);
}
