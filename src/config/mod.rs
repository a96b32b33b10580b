//! Configuration management module.
//!
//! This module handles loading application configuration from a YAML file,
//! covering the terminal event poll rate and the logging level. Nothing is
//! persisted back: the todo list itself lives only for the screen's
//! duration.

mod error;

pub use error::ConfigError;

use crate::error::AppError;
use log::LevelFilter;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/todo-tui";

const DEFAULT_TICK_RATE_IN_MS: u64 = 60;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub tick_rate_ms: u64,
    pub log_level: LevelFilter,
}

/// Define specification for configuration file.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_IN_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            tick_rate_ms: DEFAULT_TICK_RATE_IN_MS,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Return a new instance with default values.
    ///
    pub fn new() -> Config {
        Config::default()
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file is not an error; defaults apply
    /// for every field the file leaves out.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> Result<(), AppError> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        let file_path = dir_path.join(Path::new(FILE_NAME));
        if !file_path.exists() {
            return Ok(());
        }

        let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.clone(),
            message: format!("IO error: {}", e),
        })?;
        let data: FileSpec = serde_yaml::from_str(&contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;

        self.tick_rate_ms = data.tick_rate_ms;
        self.log_level = parse_log_level(&data.log_level)?;

        Ok(())
    }

    /// Return the default configuration directory path.
    ///
    fn default_path() -> Result<PathBuf, ConfigError> {
        let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirectoryNotFound)?;
        Ok(home_dir.join(Path::new(DEFAULT_DIRECTORY_PATH)))
    }
}

/// Parse a configured log level name into a level filter.
///
fn parse_log_level(name: &str) -> Result<LevelFilter, ConfigError> {
    match name.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(ConfigError::InvalidLogLevel(other.to_string())),
    }
}
