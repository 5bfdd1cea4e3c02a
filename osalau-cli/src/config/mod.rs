//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmenter launch configuration
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the external segmenter process is launched
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Java executable used to launch the segmenter
    pub java_path: String,

    /// Path to the Osalausestaja jar
    pub jar_path: Option<PathBuf>,

    /// Guess clause boundaries even when commas are missing
    pub ignore_missing_commas: bool,

    /// Raw command override, split on whitespace. When set, the java/jar
    /// fields are ignored.
    pub command: Option<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            java_path: "java".to_string(),
            jar_path: None,
            ignore_missing_commas: false,
            command: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Rewrite clause markers into clause ids and types
    pub annotate: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { annotate: false }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
