use std::path::{Path, PathBuf};

use clap::Args;
use dashgen_core::{File, WriteResult};
use dashgen_manifest::{Interface, NamingConvention, ProjectConfig, Schema};
use dialoguer::{Input, theme::ColorfulTheme};
use eyre::{Context, Result};

use crate::reports::{InitReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InitCommand {
    /// Singular entity name, e.g. `book` (prompted for when omitted)
    pub name: Option<String>,

    /// Plural entity name when the derived one is wrong, e.g. `people`
    #[arg(long)]
    pub plural: Option<String>,

    /// Directory to create the files in
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Generate under src/app/generate instead of src/app/dashboard
    #[arg(long)]
    pub generate_folder: bool,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let name = match &self.name {
            Some(name) => name.clone(),
            None => Self::prompt_name()?,
        };

        let interface = sample_interface(&name, self.plural.as_deref(), self.generate_folder);
        let report = write_project(&interface, &self.output, self.force)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn prompt_name() -> Result<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Entity name (singular)")
            .default("item".to_string())
            .interact_text()
            .wrap_err("Failed to read entity name")
    }
}

/// A starter interface covering every field kind.
fn sample_interface(name: &str, plural: Option<&str>, generate_folder: bool) -> Interface {
    let schema = Schema::new()
        .with_tag("title", "string")
        .with_tag("description", "string")
        .with_tag("price", "number")
        .with_tag("published", "boolean")
        .with_tag("releaseDate", "date")
        .with_tag("tags", "string[]")
        .with_nested(
            "details",
            Schema::new()
                .with_tag("sku", "string")
                .with_tag("stock", "number"),
        );

    let mut naming = NamingConvention::from_singular(name, plural);
    if generate_folder {
        naming.use_generate_folder = Some(true);
    }
    Interface::new(schema, naming)
}

fn write_project(interface: &Interface, output_dir: &Path, force: bool) -> Result<InitReport> {
    let config = ProjectConfig::default()
        .to_toml()
        .wrap_err("Failed to render dashgen.toml")?;
    let files = [
        ("interface.json", interface.to_json_pretty()?),
        (ProjectConfig::FILE_NAME, config),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, content) in files {
        let file = File::new(output_dir.join(name), content);
        let file = if force { file } else { file.create_once() };
        written.push((name.to_string(), file.write()?));
    }

    Ok(InitReport {
        output_dir: output_dir.to_path_buf(),
        resource: interface.resource().to_string(),
        files: written,
    })
}

#[cfg(test)]
mod tests {
    use dashgen_codegen::pipeline::Pipeline;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_sample_interface_is_valid() {
        let interface = sample_interface("book", None, false);
        let mut ctx = Pipeline::new().run(interface).unwrap();
        assert_eq!(ctx.warning_count(), 0);
        assert_eq!(ctx.take_resolved().unwrap().resource(), "books");
    }

    #[test]
    fn test_sample_interface_generate_folder() {
        let interface = sample_interface("person", Some("people"), true);
        assert_eq!(interface.resource(), "people");
        assert_eq!(interface.naming_convention.use_generate_folder, Some(true));
    }

    #[test]
    fn test_write_project_creates_files_once() {
        let temp = TempDir::new().unwrap();
        let interface = sample_interface("book", None, false);

        let first = write_project(&interface, temp.path(), false).unwrap();
        assert!(first.files.iter().all(|(_, r)| *r == WriteResult::Written));

        let parsed = Interface::from_file(temp.path().join("interface.json")).unwrap();
        assert_eq!(parsed, interface);
        assert!(ProjectConfig::from_file(temp.path().join("dashgen.toml")).is_ok());

        let second = write_project(&interface, temp.path(), false).unwrap();
        assert!(second.files.iter().all(|(_, r)| *r == WriteResult::Skipped));

        let forced = write_project(&interface, temp.path(), true).unwrap();
        assert!(forced.files.iter().all(|(_, r)| *r == WriteResult::Written));
    }
}
