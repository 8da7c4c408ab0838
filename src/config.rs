//! TOML configuration and where it is looked up.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::resolve::ResolutionPolicy;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "DEGREES_CONFIG";

/// Config file picked up from the working directory when nothing else is named
pub const DEFAULT_CONFIG_FILE: &str = "degrees.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding people.csv, movies.csv and stars.csv
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub resolution: ResolutionPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("large")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration.
    ///
    /// Looks for a config file in this order:
    /// 1. `explicit` (the `--config` flag)
    /// 2. Path in the DEGREES_CONFIG environment variable
    /// 3. ./degrees.toml, if present
    ///
    /// Falls back to defaults when none of these exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }

    /// The data directory must exist and be a directory.
    pub fn validate(&self) -> Result<()> {
        let directory = &self.data.directory;
        if !directory.exists() {
            anyhow::bail!("data directory does not exist: {}", directory.display());
        }
        if !directory.is_dir() {
            anyhow::bail!("data directory must be a directory, not a file: {}", directory.display());
        }
        Ok(())
    }
}
