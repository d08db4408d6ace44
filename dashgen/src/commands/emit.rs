use std::path::PathBuf;

use clap::Args;
use dashgen_codegen_next::{Artifact, EmitError, GeneratorOptions, emit_interface};
use dashgen_manifest::ProjectConfig;
use eyre::Result;

use super::{load_config, load_interface};
use crate::reports::format_diagnostic;

#[derive(Args)]
pub struct EmitCommand {
    /// Artifact to render
    pub artifact: Artifact,

    /// Interface file, or `-` for stdin
    #[arg(short, long, default_value = "interface.json")]
    pub input: PathBuf,

    /// Path to dashgen.toml
    #[arg(short, long, default_value = ProjectConfig::FILE_NAME)]
    pub config: PathBuf,
}

impl EmitCommand {
    pub fn run(&self) -> Result<()> {
        let config = load_config(&self.config);
        // Parse errors are reported against the real input name
        let (interface, _) = load_interface(&self.input);

        match emit_interface(self.artifact, interface, GeneratorOptions::from(&config.api)) {
            Ok(code) => {
                print!("{}", code);
                Ok(())
            }
            Err(EmitError::Input(e)) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
            Err(EmitError::Rejected(errors)) => {
                for diag in &errors {
                    eprintln!("{}", format_diagnostic(diag));
                }
                eprintln!("emit aborted: the interface has errors");
                std::process::exit(1);
            }
        }
    }
}
