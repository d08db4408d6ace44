//! Validate phase - runs lints on the interface.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::Lint;
pub use lints::{
    EmptySchemaLint, FieldNameLint, FieldTypeLint, MissingNamingLint, NamingIdentifierLint,
    ResourcePathLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the interface using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(MissingNamingLint),
                Box::new(ResourcePathLint),
                Box::new(NamingIdentifierLint),
                Box::new(EmptySchemaLint),
                Box::new(FieldNameLint),
                Box::new(FieldTypeLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Name and description of every lint that will run.
    pub fn lint_info(&self) -> Vec<(&'static str, &'static str)> {
        self.lints
            .iter()
            .map(|l| (l.name(), l.description()))
            .collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the interface and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            lint.check(&ctx.interface, &mut ctx.diagnostics);
        }

        // Warnings are allowed
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dashgen_manifest::{Interface, NamingConvention, Schema};

    use super::*;
    use crate::pipeline::Diagnostic;

    #[test]
    fn test_with_errors() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _interface: &Interface, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error("validate", "forced error"));
            }
        }

        let mut ctx = CompilationContext::new(Interface::default());
        let result = ValidatePhase::empty().with_lint(AlwaysErrorLint).run(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_warnings_allowed() {
        let interface = Interface::new(Schema::new(), NamingConvention::from_singular("book", None));
        let mut ctx = CompilationContext::new(interface);

        let result = ValidatePhase::new().run(&mut ctx);

        assert!(result.is_ok());
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_lint_info() {
        let names: Vec<_> = ValidatePhase::new()
            .lint_info()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec![
                "missing-naming",
                "resource-path",
                "naming-identifier",
                "empty-schema",
                "field-name",
                "field-type"
            ]
        );
    }
}
