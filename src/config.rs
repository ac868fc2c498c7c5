//! Configuration management
//!
//! This module handles loading and managing configuration from:
//! - Command-line arguments
//! - Configuration files (TOML)
//! - Defaults

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output artifact settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory where graph artifacts are written when no explicit path is given
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,
}

/// Graph-level DOT attributes applied to every rendered graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Name used in the `digraph <name>` header
    #[serde(default = "default_graph_name")]
    pub name: String,

    /// Layout direction (LR, TB, ...)
    #[serde(default = "default_rankdir")]
    pub rankdir: String,

    /// Font size for the graph title area
    #[serde(default = "default_fontsize")]
    pub fontsize: u32,

    /// Use spline edge routing
    #[serde(default = "default_splines")]
    pub splines: bool,

    /// Allow node overlap during layout
    #[serde(default)]
    pub overlap: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path
    pub file: Option<PathBuf>,
}

// Default value functions

fn default_output_directory() -> PathBuf {
    PathBuf::from("./output")
}

fn default_graph_name() -> String {
    "G".to_string()
}

fn default_rankdir() -> String {
    "LR".to_string()
}

fn default_fontsize() -> u32 {
    30
}

fn default_splines() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

// Default implementations

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            name: default_graph_name(),
            rankdir: default_rankdir(),
            fontsize: default_fontsize(),
            splines: default_splines(),
            overlap: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config file {:?}: {}", path, e)))?;

        Ok(config)
    }

    /// Load configuration from default locations
    ///
    /// Searches in order:
    /// 1. ./config.toml
    /// 2. ~/.evm-access-graph/config.toml
    /// 3. /etc/evm-access-graph/config.toml
    pub fn load() -> Result<Self> {
        let paths = vec![
            PathBuf::from("config.toml"),
            dirs::home_dir()
                .map(|h| h.join(".evm-access-graph").join("config.toml"))
                .unwrap_or_else(|| PathBuf::from("/dev/null")),
            PathBuf::from("/etc/evm-access-graph/config.toml"),
        ];

        for path in paths {
            if path.exists() {
                tracing::info!("Loading config from {:?}", path);
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Config::default())
    }
}
