use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::SniffError;

/// Number of top posts examined when no cohort size is configured.
pub const DEFAULT_TOP_POSTS: usize = 5;

pub const DATA_ENV: &str = "POSTSNIFF_DATA";
pub const TOP_POSTS_ENV: &str = "POSTSNIFF_TOP_POSTS";

/// TOML-backed configuration loaded from disk.
/// Every section is optional; missing values fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub trends: TrendsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendsConfig {
    /// Signed so that negative values reach cohort validation instead of
    /// failing as a TOML type error.
    #[serde(default = "default_top_posts")]
    pub top_posts: i64,
}

impl Default for TrendsConfig {
    fn default() -> Self {
        Self {
            top_posts: default_top_posts(),
        }
    }
}

fn default_top_posts() -> i64 {
    DEFAULT_TOP_POSTS as i64
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// Effective settings after merging file, environment and CLI values.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub top_posts: i64,
}

impl Default for Config {
    fn default() -> Self {
        FileConfig::default().into()
    }
}

impl From<FileConfig> for Config {
    fn from(file: FileConfig) -> Self {
        Self {
            data_path: file.data.path,
            top_posts: file.trends.top_posts,
        }
    }
}

impl Config {
    /// Load from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => load_config(path)?,
            None => FileConfig::default(),
        };
        let mut config = Config::from(file);
        config.apply_env()?;
        Ok(config)
    }

    /// Override values from `POSTSNIFF_DATA` / `POSTSNIFF_TOP_POSTS`.
    pub fn apply_env(&mut self) -> Result<(), SniffError> {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), SniffError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(DATA_ENV).filter(|v| !v.trim().is_empty()) {
            self.data_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = lookup(TOP_POSTS_ENV).filter(|v| !v.trim().is_empty()) {
            self.top_posts = raw.trim().parse().map_err(|_| {
                SniffError::Config(format!("{TOP_POSTS_ENV} must be an integer, got {raw:?}"))
            })?;
        }
        Ok(())
    }

    pub fn log_summary(&self) {
        info!(
            data_path = ?self.data_path,
            top_posts = self.top_posts,
            "Configuration resolved"
        );
    }
}
