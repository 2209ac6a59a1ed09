use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use viewdock::PartitionMode;

/// Defaults read from a `--config` TOML file. Command-line flags win.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    pub mode: Option<PartitionMode>,
    pub name: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub sort: Option<SortConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SortConfig {
    pub field: String,
    #[serde(default)]
    pub descending: bool,
}

impl SessionConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

pub fn load_session(path: Option<&Path>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SessionConfig::from_toml(&text)
        .with_context(|| format!("Invalid config file: {}", path.display()))
}
