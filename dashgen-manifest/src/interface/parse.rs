//! Interface parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::Interface;
use crate::{Error, Result, error::SourceContext};

impl FromStr for Interface {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_interface(s, "interface.json")
    }
}

impl Interface {
    /// Parse an interface file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_interface(&content, &path.display().to_string())
    }

    /// Parse an interface from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_interface(content, filename)
    }
}

/// Parse an interface from content with the given filename for error reporting.
///
/// Malformed JSON is an error; there is no fallback to an empty interface.
pub fn parse_interface(content: &str, filename: &str) -> Result<Interface> {
    let source_ctx = SourceContext::new(content, filename);
    serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))
}
