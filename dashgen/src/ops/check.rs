//! Check operation: interface validation.

use std::path::Path;

use dashgen_codegen::{
    pipeline::{CompilationContext, Pipeline},
    schema::SchemaTreeDisplay,
};
use dashgen_manifest::Interface;
use eyre::Result;
use log::debug;

use crate::reports::{CheckReport, CheckSummary};

/// Run the pipeline on `interface` and collect its diagnostics.
///
/// A failing validation is not an error here; it shows up in the report.
pub fn check(interface: Interface, input: &Path) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(interface);
    let summary = match Pipeline::new().run_in(&mut ctx) {
        Ok(()) => {
            let resolved = ctx.take_resolved()?;
            Some(CheckSummary {
                resource: resolved.resource().to_string(),
                output_root: resolved.output_root().to_string(),
                field_count: resolved.fields.len(),
                schema: SchemaTreeDisplay::new(&resolved.schema)
                    .indent("  ")
                    .prefix("  ")
                    .render(),
            })
        }
        Err(err) => {
            debug!("validation failed: {}", err);
            None
        }
    };

    Ok(CheckReport {
        input: input.to_path_buf(),
        diagnostics: ctx.diagnostics,
        summary,
    })
}
