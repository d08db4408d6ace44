use std::path::PathBuf;

use clap::Args;
use dashgen_codegen_next::{Artifact, GeneratorOptions};
use dashgen_manifest::ProjectConfig;
use eyre::Result;
use log::warn;

use super::{load_config, load_interface};
use crate::{
    history::{self, StoreAction},
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Interface file, or `-` for stdin
    #[arg(short, long, default_value = "interface.json")]
    pub input: PathBuf,

    /// Project root to write into (overrides output.dir in dashgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Only generate these artifacts (repeatable)
    #[arg(long = "only", value_name = "ARTIFACT")]
    pub only: Vec<Artifact>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep files that already exist instead of overwriting them
    #[arg(long)]
    pub keep_existing: bool,

    /// Page size of list pages (overrides api.page_limit)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_limit: Option<u32>,

    /// Path to dashgen.toml
    #[arg(short, long, default_value = ProjectConfig::FILE_NAME)]
    pub config: PathBuf,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        let (interface, input) = load_interface(&self.input);

        let output_dir = self.output.clone().unwrap_or_else(|| config.output.dir.clone());
        let mut generator = GeneratorOptions::from(&config.api);
        if let Some(limit) = self.page_limit {
            generator.page_limit = limit;
        }

        let report = ops::generate(
            interface,
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                keep_existing: self.keep_existing,
                only: self.only.clone(),
                generator,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        if !self.dry_run {
            record_history(input);
        }
        Ok(())
    }
}

/// History is a convenience; failing to record it does not fail generation.
fn record_history(input: String) {
    let recorded = history::open_default()
        .and_then(|mut store| store.dispatch(StoreAction::Record { input }).map(|_| ()));
    if let Err(err) = recorded {
        warn!("could not record history: {:#}", err);
    }
}
