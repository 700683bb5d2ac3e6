//! Configuration file support for uv-deps-csv.
//!
//! Provides YAML-based configuration through `uv-deps-csv.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_INDEX_URL;
use crate::application::dto::DEFAULT_REQUEST_DELAY;
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "uv-deps-csv.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output: Option<String>,
    pub include_dev: Option<bool>,
    pub index_url: Option<String>,
    pub request_delay_ms: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref index_url) = config.index_url {
        validate_index_url(index_url)?;
    }
    Ok(())
}

fn validate_index_url(index_url: &str) -> Result<()> {
    if !(index_url.starts_with("http://") || index_url.starts_with("https://")) {
        return Err(ReportError::Validation {
            message: format!(
                "Invalid index URL '{}': it must start with http:// or https://\n\n\
                 💡 Hint: Use the base URL of the index, e.g. \"https://pypi.org\".",
                index_url
            ),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Values given on the command line; `None`/`false` means "not given".
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output: Option<String>,
    pub no_dev: bool,
    pub index_url: Option<String>,
}

/// Effective settings after merging: CLI flag, then config file, then default.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub output: Option<PathBuf>,
    pub include_dev: bool,
    pub index_url: String,
    pub request_delay: Duration,
}

impl ReportSettings {
    pub fn resolve(cli: CliOverrides, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let index_url = cli
            .index_url
            .or(config.index_url)
            .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string());
        validate_index_url(&index_url)?;

        Ok(Self {
            output: cli.output.or(config.output).map(PathBuf::from),
            include_dev: !cli.no_dev && config.include_dev.unwrap_or(true),
            index_url,
            request_delay: config
                .request_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REQUEST_DELAY),
        })
    }
}
