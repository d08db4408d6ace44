use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_interface;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Interface file, or `-` for stdin
    #[arg(short, long, default_value = "interface.json")]
    pub input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let (interface, _) = load_interface(&self.input);
        let report = ops::check(interface, &self.input)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
