//! One-shot rendering of a single artifact from interface JSON.

use dashgen_codegen::pipeline::{CompilationContext, Diagnostic, Pipeline};
use dashgen_manifest::Interface;
use thiserror::Error;

use crate::{Artifact, Generator, GeneratorOptions};

/// Why an artifact could not be rendered.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The input is not a well-formed interface document.
    #[error(transparent)]
    Input(#[from] Box<dashgen_manifest::Error>),
    /// The interface failed validation; holds the error diagnostics.
    #[error("interface rejected with {} error(s)", .0.len())]
    Rejected(Vec<Diagnostic>),
}

/// Render `artifact` from an interface JSON document with default options.
///
/// Malformed JSON and interfaces the pipeline rejects are errors; no partial
/// artifact is ever returned.
///
/// ```
/// use dashgen_codegen_next::{Artifact, emit};
///
/// let json = r#"{"schema":{"title":"string"},"namingConvention":{"Users_1_000___":"Books","users_2_000___":"books","User_3_000___":"Book","user_4_000___":"book"}}"#;
/// let code = emit(Artifact::HomeButton, json).unwrap();
/// assert!(code.contains(r#"href="/dashboard/books/all""#));
///
/// assert!(emit(Artifact::HomeButton, "{not valid json").is_err());
/// ```
pub fn emit(artifact: Artifact, input_json: &str) -> Result<String, EmitError> {
    emit_with_options(artifact, input_json, GeneratorOptions::default())
}

/// [`emit`] with explicit generator options.
pub fn emit_with_options(
    artifact: Artifact,
    input_json: &str,
    options: GeneratorOptions,
) -> Result<String, EmitError> {
    let interface: Interface = input_json.parse()?;
    emit_interface(artifact, interface, options)
}

/// Validate an already parsed interface and render `artifact` from it.
///
/// Runs the same pipeline as a full generation, so anything `generate`
/// rejects is rejected here too.
pub fn emit_interface(
    artifact: Artifact,
    interface: Interface,
    options: GeneratorOptions,
) -> Result<String, EmitError> {
    let mut ctx = CompilationContext::new(interface);
    let resolved = match Pipeline::new().run_in(&mut ctx) {
        Ok(()) => ctx.take_resolved(),
        Err(err) => Err(err),
    };
    let resolved = resolved.map_err(|err| {
        let mut errors: Vec<Diagnostic> = ctx.errors().cloned().collect();
        if errors.is_empty() {
            errors.push(Diagnostic::error("emit", err.to_string()));
        }
        EmitError::Rejected(errors)
    })?;

    let entry = Generator::new(&resolved)
        .with_options(options)
        .render(artifact);
    Ok(entry.content)
}
