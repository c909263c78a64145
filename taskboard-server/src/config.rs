//! Layered server configuration
//!
//! Sources in precedence order (later sources override earlier ones):
//! 1. Built-in defaults
//! 2. `taskboard.toml` in the working directory, or the `--config` file
//! 3. `TASKBOARD_*` environment variables
//! 4. Command line flags

use crate::cli::Cli;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use taskboard::DEFAULT_ACTIVITY_LIMIT;
use thiserror::Error;

/// Config file looked up in the working directory
pub const CONFIG_FILENAME: &str = "taskboard.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "TASKBOARD_";

/// Result type for configuration loading
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly named configuration file does not exist
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A source could not be parsed into [`Config`]
    #[error("Failed to parse configuration: {source}")]
    ParseError { source: Box<figment::Error> },

    /// A value parsed but is unusable
    #[error("Invalid configuration value for key '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::ParseError {
            source: Box::new(error),
        }
    }
}

impl ConfigError {
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Listen address
    pub bind: SocketAddr,
    /// SQLite database for the item list
    pub database: PathBuf,
    /// Board snapshot file; the board lives only in memory when unset
    pub board_snapshot: Option<PathBuf>,
    /// Start from the sample board when no snapshot exists
    pub seed_board: bool,
    /// Insert the starter items into an empty item table
    pub seed_items: bool,
    /// Heading of the item list page
    pub list_title: String,
    /// Activity entries kept in memory
    pub activity_limit: usize,
    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            database: PathBuf::from(taskboard_items::DEFAULT_DB_FILENAME),
            board_snapshot: None,
            seed_board: true,
            seed_items: true,
            list_title: "Today".to_string(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, config file and environment, without command line flags
    pub fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load every layer, flags last
    pub fn load(cli: &Cli) -> ConfigResult<Self> {
        let config_file = match &cli.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            Some(path) => path.clone(),
            None => PathBuf::from(CONFIG_FILENAME),
        };
        tracing::debug!(path = %config_file.display(), "loading configuration");

        let config: Config = Self::figment(&config_file)
            .merge(Serialized::defaults(cli.overrides()))
            .extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.list_title.trim().is_empty() {
            return Err(ConfigError::invalid_value("list_title", "must not be empty"));
        }
        if self.activity_limit == 0 {
            return Err(ConfigError::invalid_value(
                "activity_limit",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
