mod check;
mod completions;
mod emit;
mod generate;
mod history;
mod init;

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use dashgen_manifest::{Error, Interface, ProjectConfig};
use emit::EmitCommand;
use eyre::Result;
use generate::GenerateCommand;
use history::HistoryCommand;
use init::InitCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for dashgen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "dashgen")]
#[command(version)]
#[command(about = "Generate Next.js CRUD dashboards from an interface description")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Emit(cmd) => cmd.run(),
            Commands::History(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a sample interface.json and dashgen.toml
    Init(InitCommand),

    /// Generate dashboard, API and model files from interface.json
    Generate(GenerateCommand),

    /// Validate interface.json without generating code
    Check(CheckCommand),

    /// Print a single generated artifact to stdout
    Emit(EmitCommand),

    /// Manage saved interfaces and generation history
    History(HistoryCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Read interface JSON from `path`, or from stdin when `path` is `-`.
///
/// Returns the raw text alongside the file name used for error reports.
pub(crate) fn read_input(path: &Path) -> dashgen_manifest::Result<(String, String)> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| {
                Box::new(Error::Io {
                    path: PathBuf::from("<stdin>"),
                    source,
                })
            })?;
        return Ok((content, "<stdin>".to_string()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })?;
    Ok((content, path.display().to_string()))
}

/// Read and parse an interface, exiting with a report on failure.
pub(crate) fn load_interface(path: &Path) -> (Interface, String) {
    let (content, filename) = read_input(path).unwrap_or_exit();
    let interface = Interface::from_str_with_filename(&content, &filename).unwrap_or_exit();
    (interface, content)
}

/// Load `dashgen.toml`, falling back to defaults when it does not exist.
pub(crate) fn load_config(path: &Path) -> ProjectConfig {
    ProjectConfig::load_or_default(path).unwrap_or_exit()
}
