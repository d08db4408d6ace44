//! Resolve phase - validates naming and flattens the schema.

use eyre::Result;

use crate::{
    pipeline::{CompilationContext, Phase},
    schema::ResolvedInterface,
};

/// Phase that populates [`CompilationContext::resolved`].
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Validate naming and flatten the schema into field paths"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let resolved = ResolvedInterface::resolve(&ctx.interface)?;
        log::debug!(
            "resolved '{}' with {} field(s) under {}",
            resolved.resource(),
            resolved.fields.len(),
            resolved.output_root()
        );
        ctx.resolved = Some(resolved);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use dashgen_manifest::{Interface, NamingConvention, Schema};

    use super::*;

    #[test]
    fn test_missing_naming_is_fatal() {
        let mut ctx = CompilationContext::new(Interface::default());
        let err = ResolvePhase.run(&mut ctx).unwrap_err();
        assert!(err.to_string().contains("missing required naming field"));
    }

    #[test]
    fn test_resolves_generate_folder() {
        let mut convention = NamingConvention::from_singular("book", None);
        convention.use_generate_folder = Some(true);
        let mut ctx = CompilationContext::new(Interface::new(Schema::new(), convention));

        ResolvePhase.run(&mut ctx).unwrap();
        let resolved = ctx.take_resolved().unwrap();
        assert_eq!(resolved.naming.resource_dir(), "src/app/generate/books");
    }
}
