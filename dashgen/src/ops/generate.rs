//! Generate operation: write or preview a resource's files.

use std::path::Path;

use dashgen_codegen::{
    language::LanguageCodegen,
    pipeline::{CompilationContext, Pipeline},
};
use dashgen_codegen_next::{Artifact, Generator, GeneratorOptions};
use dashgen_manifest::Interface;
use eyre::{Context, Result};
use log::debug;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project root the generated paths are relative to.
    pub output_dir: &'a Path,
    /// Preview without writing files.
    pub dry_run: bool,
    /// Leave files that already exist untouched.
    pub keep_existing: bool,
    /// Restrict output to these artifacts; empty means all.
    pub only: Vec<Artifact>,
    pub generator: GeneratorOptions,
}

/// Validate `interface` and generate its files.
///
/// Validation errors produce a rejected report; write failures are errors.
pub fn generate(interface: Interface, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut ctx = CompilationContext::new(interface);
    if let Err(err) = Pipeline::new().run_in(&mut ctx) {
        debug!("validation failed: {}", err);
        return Ok(GenerateReport {
            resource: None,
            diagnostics: ctx.diagnostics,
            result: GenerationResult::Rejected,
        });
    }

    let resolved = ctx.take_resolved()?;
    let generator = Generator::new(&resolved)
        .with_options(opts.generator)
        .only(opts.only);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let mut registry = generator.registry();
        if opts.keep_existing {
            registry.keep_existing();
        }
        let stats = registry
            .write_all(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written_paths,
            skipped: stats.skipped_paths,
        })
    };

    Ok(GenerateReport {
        resource: Some(resolved.resource().to_string()),
        diagnostics: ctx.diagnostics,
        result,
    })
}
