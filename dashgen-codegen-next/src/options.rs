//! Settings that shape generated code but are not part of the interface.

use dashgen_manifest::ApiConfig;

/// Generator options, usually taken from `[api]` in `dashgen.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Environment variable holding the API base URL
    pub base_url_env: String,
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// API mount path, e.g. `/api/v1`
    pub api_mount: String,
    /// Page size used by list pages and the store
    pub page_limit: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::from(&ApiConfig::default())
    }
}

impl From<&ApiConfig> for GeneratorOptions {
    fn from(api: &ApiConfig) -> Self {
        Self {
            base_url_env: api.base_url_env.clone(),
            token_env: api.token_env.clone(),
            api_mount: api.mount.clone(),
            page_limit: api.page_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_config_defaults() {
        let options = GeneratorOptions::default();
        assert_eq!(options.base_url_env, "NEXT_PUBLIC_API_URL");
        assert_eq!(options.token_env, "API_TOKEN");
        assert_eq!(options.api_mount, "/api/v1");
        assert_eq!(options.page_limit, 10);
    }
}
