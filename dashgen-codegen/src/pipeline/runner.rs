//! Pipeline orchestrator.

use dashgen_manifest::Interface;
use eyre::Result;
use log::debug;

use super::{
    CompilationContext, Phase,
    phases::{ResolvePhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// Runs the built-in phases (validate, resolve) followed by any user
/// phases.
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .validate(ValidatePhase::new().with_lint(MyLint))
///     .phase(MyPhase);
///
/// let ctx = pipeline.run(interface)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints and no user phases.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
        }
    }

    /// Replace the validate phase, e.g. to add lints.
    pub fn validate(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Run the pipeline on an interface.
    pub fn run(&self, interface: Interface) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(interface);
        self.run_in(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Diagnostics stay in `ctx` when a phase fails, so callers can report
    /// them.
    pub fn run_in(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut phases: Vec<&dyn Phase> = vec![&self.validate, &ResolvePhase];
        phases.extend(self.phases.iter().map(|p| p.as_ref() as &dyn Phase));

        for phase in phases {
            debug!("running phase {}", phase.name());
            phase.run(ctx)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
