//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// A phase in the pipeline.
///
/// Phases run in order and may read and modify the context. Non-fatal
/// issues are recorded as diagnostics; returning an error stops the
/// pipeline.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics).
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
