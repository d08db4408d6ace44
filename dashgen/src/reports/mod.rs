//! Report data structures for commands.
//!
//! Commands build reports, then render them to an [`Output`].

mod check;
mod generate;
mod history;
mod init;
mod output;

pub(crate) use check::format_diagnostic;
pub use check::{CheckReport, CheckSummary};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use history::HistoryReport;
pub use init::InitReport;
pub use output::{Report, TerminalOutput};
