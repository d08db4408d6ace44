use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "interface.json");
/// serde_json::from_str::<Interface>(content).map_err(|e| ctx.json_error(e))?;
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an error from a serde_json error.
    ///
    /// Syntax errors (including truncated input) become [`Error::Parse`];
    /// well-formed JSON that does not fit the interface becomes [`Error::Shape`].
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = self.span_at(source.line(), source.column());
        let error = if source.is_data() {
            Error::Shape {
                src: self.named_source(),
                span,
                source,
            }
        } else {
            Error::Parse {
                src: self.named_source(),
                span,
                source,
            }
        };
        Box::new(error)
    }

    /// Create a config parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an invalid config value error.
    pub fn invalid_config(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::InvalidConfig {
            src: self.named_source(),
            message: message.into(),
        })
    }

    /// Convert a 1-based line/column pair into a byte span.
    fn span_at(&self, line: usize, column: usize) -> Option<SourceSpan> {
        if line == 0 {
            return None;
        }
        let line_start: usize = self
            .src
            .split_inclusive('\n')
            .take(line - 1)
            .map(str::len)
            .sum();
        let offset = (line_start + column.saturating_sub(1)).min(self.src.len());
        let len = usize::from(offset < self.src.len());
        Some(SourceSpan::from((offset, len)))
    }
}

/// Naming fields required for emission are missing.
///
/// `missing` holds the input paths, e.g. `namingConvention.User_3_000___`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("missing required naming field(s): {}", missing.join(", "))]
#[diagnostic(
    code(dashgen::validation_error),
    help("every naming convention needs its plural and singular casings, e.g. Books, books, Book, book")
)]
pub struct ValidationError {
    pub missing: Vec<String>,
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'dashgen init <name>' to create a sample interface"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse interface JSON")]
    #[diagnostic(code(dashgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("interface JSON does not have the expected shape")]
    #[diagnostic(
        code(dashgen::shape_error),
        help("expected an object with `schema` and `namingConvention` keys")
    )]
    Shape {
        #[source_code]
        src: NamedSource<String>,
        #[label("unexpected value")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to parse dashgen.toml")]
    #[diagnostic(code(dashgen::config_error))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(dashgen::config_error))]
    InvalidConfig {
        #[source_code]
        src: NamedSource<String>,
        message: String,
    },
}

impl Error {
    /// Returns true for input that is not well-formed JSON.
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
