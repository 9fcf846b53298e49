//! Configuration loading from whiteout.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File looked up in the current directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "whiteout.toml";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub target: TargetConfig,
}

/// Where the PNGs live
#[derive(Debug, Clone, Deserialize)]
pub struct TargetConfig {
    /// Directory whose `.png` files are rewritten in place
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("public/icons/3d")
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::parse(&content)
    }

    /// Load from whiteout.toml in the current directory, or fall back to
    /// defaults when there is no such file
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::load(DEFAULT_CONFIG_FILE)
        } else {
            log::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Pick the directory to scan: an explicit override wins over the file
    pub fn resolve_directory(&self, cli_directory: Option<PathBuf>) -> PathBuf {
        cli_directory.unwrap_or_else(|| self.target.directory.clone())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
