use std::path::PathBuf;

use clap::{Args, Subcommand};
use eyre::{Result, bail};

use super::load_interface;
use crate::{
    history::{self, StoreAction},
    reports::{HistoryReport, Report, TerminalOutput},
};

#[derive(Args)]
pub struct HistoryCommand {
    #[command(subcommand)]
    command: HistorySubcommand,
}

#[derive(Subcommand)]
enum HistorySubcommand {
    /// List saved interfaces and recent inputs
    List,

    /// Print a saved interface as JSON
    Show {
        name: String,
    },

    /// Save an interface under a name
    Save {
        name: String,

        /// Interface file, or `-` for stdin
        #[arg(short, long, default_value = "interface.json")]
        input: PathBuf,
    },

    /// Remove a saved interface
    Remove {
        name: String,
    },

    /// Forget recent inputs (saved interfaces are kept)
    Clear,
}

impl HistoryCommand {
    pub fn run(&self) -> Result<()> {
        let mut store = history::open_default()?;

        match &self.command {
            HistorySubcommand::List => {
                HistoryReport {
                    state: store.state(),
                }
                .render(&mut TerminalOutput::new());
            }
            HistorySubcommand::Show { name } => {
                let Some(interface) = store.state().saved.get(name) else {
                    bail!("no saved interface named '{}'", name);
                };
                print!("{}", interface.to_json_pretty()?);
            }
            HistorySubcommand::Save { name, input } => {
                let (interface, _) = load_interface(input);
                store.dispatch(StoreAction::Save {
                    name: name.clone(),
                    interface,
                })?;
                println!("Saved '{}'", name);
            }
            HistorySubcommand::Remove { name } => {
                if !store.state().saved.contains_key(name) {
                    bail!("no saved interface named '{}'", name);
                }
                store.dispatch(StoreAction::Remove { name: name.clone() })?;
                println!("Removed '{}'", name);
            }
            HistorySubcommand::Clear => {
                store.dispatch(StoreAction::ClearHistory)?;
                println!("History cleared");
            }
        }
        Ok(())
    }
}
