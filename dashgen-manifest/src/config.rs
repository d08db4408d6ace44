//! Project configuration (`dashgen.toml`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result, error::SourceContext};

/// Optional project-level settings.
///
/// ```toml
/// [output]
/// dir = "."
///
/// [api]
/// base_url_env = "NEXT_PUBLIC_API_URL"
/// token_env = "API_TOKEN"
/// mount = "/api/v1"
/// page_limit = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    pub output: OutputConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Project root the generated paths are relative to
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
        }
    }
}

/// Settings for the HTTP collaborator consumed by generated pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Environment variable holding the API base URL
    pub base_url_env: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// Path the API is mounted at, relative to the base URL
    pub mount: String,
    /// Default page size for list pages
    pub page_limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url_env: "NEXT_PUBLIC_API_URL".to_string(),
            token_env: "API_TOKEN".to_string(),
            mount: "/api/v1".to_string(),
            page_limit: 10,
        }
    }
}

impl ProjectConfig {
    /// Default file name looked up in the working directory.
    pub const FILE_NAME: &'static str = "dashgen.toml";

    /// Parse a config file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Load the config at `path`, or the defaults when no file exists there.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            log::debug!("no {} found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse config content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config: ProjectConfig =
            toml::from_str(content).map_err(|e| source_ctx.config_error(e))?;
        config.validate(&source_ctx)?;
        Ok(config)
    }

    fn validate(&self, source_ctx: &SourceContext) -> Result<()> {
        if self.api.page_limit == 0 {
            return Err(source_ctx.invalid_config("api.page_limit must be greater than zero"));
        }
        if !self.api.mount.starts_with('/') {
            return Err(source_ctx.invalid_config(format!(
                "api.mount must start with '/', got '{}'",
                self.api.mount
            )));
        }
        for (key, value) in [
            ("api.base_url_env", &self.api.base_url_env),
            ("api.token_env", &self.api.token_env),
        ] {
            if !dashgen_core::is_js_identifier(value) {
                return Err(source_ctx.invalid_config(format!(
                    "{} must be an environment variable name, got '{}'",
                    key, value
                )));
            }
        }
        Ok(())
    }

    /// Render as TOML, e.g. for `dashgen init`.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::from_str_with_filename("", "dashgen.toml").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert_eq!(config.api.base_url_env, "NEXT_PUBLIC_API_URL");
        assert_eq!(config.api.page_limit, 10);
        assert_eq!(config.output.dir, PathBuf::from("."));
    }

    #[test]
    fn test_partial_override() {
        let config = ProjectConfig::from_str_with_filename(
            r#"
            [api]
            token_env = "ADMIN_TOKEN"
            page_limit = 25
            "#,
            "dashgen.toml",
        )
        .unwrap();
        assert_eq!(config.api.token_env, "ADMIN_TOKEN");
        assert_eq!(config.api.page_limit, 25);
        assert_eq!(config.api.mount, "/api/v1");
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = ProjectConfig::from_str_with_filename("[api]\nbase = 1\n", "dashgen.toml")
            .unwrap_err();
        assert!(matches!(*err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let err = ProjectConfig::from_str_with_filename("[api]\npage_limit = 0\n", "dashgen.toml")
            .unwrap_err();
        assert!(err.to_string().contains("page_limit"));
    }

    #[test]
    fn test_invalid_env_name_rejected() {
        let err = ProjectConfig::from_str_with_filename(
            "[api]\ntoken_env = \"api token\"\n",
            "dashgen.toml",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig::load_or_default(temp.path().join("dashgen.toml")).unwrap();
        assert_eq!(config, ProjectConfig::default());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let config = ProjectConfig::default();
        let text = config.to_toml().unwrap();
        let parsed = ProjectConfig::from_str_with_filename(&text, "dashgen.toml").unwrap();
        assert_eq!(parsed, config);
    }
}
