use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

use crate::scan::build_globset;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Markdown extensions enabled on the renderer.
#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "default_true")]
    pub tables: bool,
    #[serde(default = "default_true")]
    pub strikethrough: bool,
    #[serde(default)]
    pub footnotes: bool,
    #[serde(default = "default_true")]
    pub tasklists: bool,
    #[serde(default)]
    pub smart_punctuation: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tables: true,
            strikethrough: true,
            footnotes: false,
            tasklists: true,
            smart_punctuation: false,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
    #[serde(default)]
    pub level_format: LevelFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            level_format: LevelFormat::Number,
        }
    }
}

/// How a heading level is written in JSON output.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LevelFormat {
    /// `"level": 2`
    #[default]
    Number,
    /// `"level": "h2"`
    Tag,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.md".to_string(), "**/*.markdown".to_string()]
}

impl Config {
    /// Configuration used when no config file is present.
    pub fn minimal() -> Self {
        Self::default()
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&content)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path` if it exists, otherwise fall back to [`Config::minimal`].
pub fn load_config_or_minimal(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path)
    } else {
        log::debug!(
            "config file {} not found, using defaults",
            path.display()
        );
        Ok(Config::minimal())
    }
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = toml::from_str(content).with_context(|| "Failed to parse config file")?;

    // Validate scan
    if config.scan.include_globs.is_empty() {
        anyhow::bail!("scan.include_globs must not be empty");
    }
    build_globset(&config.scan.include_globs).context("Invalid pattern in scan.include_globs")?;
    build_globset(&config.scan.exclude_globs).context("Invalid pattern in scan.exclude_globs")?;

    Ok(config)
}
