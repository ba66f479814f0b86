//! Front end configuration, read from an optional TOML file.

use anyhow::{Context, Result};
use inference_core::EngineConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Knowledge base used when neither the config file nor the command line names one.
pub const DEFAULT_KNOWLEDGE_BASE: &str = "knowledge.json";

/// Everything the terminal front end can be configured with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub knowledge_base: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is not set (e.g. "info", "inference_core=debug").
    pub log_level: Option<String>,

    pub engine: EngineConfig,

    pub display: DisplayConfig,
}

/// Texts shown around a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub failure_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Expert System".to_string(),
            failure_message: "No result could be determined from your answers.".to_string(),
        }
    }
}

impl CliConfig {
    /// Read a config file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&source).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Knowledge base path, falling back to the default file name.
    pub fn knowledge_base_path(&self) -> PathBuf {
        self.knowledge_base
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KNOWLEDGE_BASE))
    }

    pub fn log_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or("error")
    }
}
