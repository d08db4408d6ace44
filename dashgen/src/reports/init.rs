//! Init command report.

use std::path::PathBuf;

use dashgen_core::WriteResult;

use super::output::{Output, Report};

#[derive(Debug)]
pub struct InitReport {
    pub output_dir: PathBuf,
    pub resource: String,
    /// Files with the outcome of writing each.
    pub files: Vec<(String, WriteResult)>,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Initialized '{}'", self.resource));
        for (path, result) in &self.files {
            match result {
                WriteResult::Written => out.added_item(path),
                WriteResult::Skipped => out.skipped_item(&format!("{} (exists)", path)),
            }
        }
        out.newline();
        out.section("Next steps");
        if self.output_dir != PathBuf::from(".") {
            out.list_item(&format!("cd {}", self.output_dir.display()));
        }
        out.list_item("edit interface.json");
        out.list_item("dashgen generate");
    }
}
