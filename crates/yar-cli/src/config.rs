//! Loading codec settings from a TOML file

use anyhow::{Context, Result};
use std::path::Path;
use yar_core::CodecConfig;

/// Load configuration from `path`, or defaults when no path is given
pub fn load(path: Option<&Path>) -> Result<CodecConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            from_toml(&content)
        }
        None => Ok(CodecConfig::default()),
    }
}

/// Parse configuration from TOML text
pub fn from_toml(content: &str) -> Result<CodecConfig> {
    toml::from_str(content).context("Failed to parse config")
}

/// Apply command-line overrides on top of file settings
pub fn with_overrides(
    mut config: CodecConfig,
    provider: Option<String>,
    token: Option<String>,
    log_level: Option<String>,
) -> CodecConfig {
    if provider.is_some() {
        config.provider = provider;
    }
    if token.is_some() {
        config.token = token;
    }
    if let Some(level) = log_level {
        config.log_level = level;
    }
    config
}
