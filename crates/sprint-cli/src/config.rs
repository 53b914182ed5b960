//! Optional TOML configuration for CLI defaults.
//!
//! Resolution: explicit `--config` path > `SPRINT_CONFIG` env > built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::Deserialize;

/// How a plan or the catalog is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Day count used when a request does not name one.
    pub default_days: u32,
    pub format: OutputFormat,
    /// Listen address for `sprint http`.
    pub bind: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_days: 30,
            format: OutputFormat::Text,
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Config {
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("SPRINT_CONFIG").ok().map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
