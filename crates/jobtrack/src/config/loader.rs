use std::path::{Path, PathBuf};

use crate::config::schema::{Config, LOG_LEVELS};
use crate::error::ConfigError;

/// Config file name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "jobtrack.json";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    load_config_from_str(&content)
}

pub fn load_config_from_str(content: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_json::from_str(content)?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.data_file.as_os_str().is_empty() {
        return Err(ConfigError::Validation {
            message: "dataFile must not be empty".to_string(),
        });
    }

    let level = config.log_level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::Validation {
            message: format!(
                "Unsupported logLevel '{}', expected one of: {}",
                config.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    Ok(())
}

/// Candidate config files, most specific first.
pub fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("jobtrack").join("config.json"));
    }
    paths
}

/// Result of looking for a config file.
#[derive(Debug)]
pub struct DiscoveredConfig {
    pub config: Config,
    /// The file the config came from, if any.
    pub source: Option<PathBuf>,
    /// Config files that exist but could not be used.
    pub skipped: Vec<ConfigError>,
}

/// Loads the first usable config file in [`config_search_paths`], falling
/// back to defaults. Broken files are skipped and reported, never fatal.
pub fn discover_config() -> DiscoveredConfig {
    discover_config_in(&config_search_paths())
}

pub fn discover_config_in(paths: &[PathBuf]) -> DiscoveredConfig {
    let mut skipped = Vec::new();

    for path in paths {
        if !path.is_file() {
            continue;
        }
        match load_config(path) {
            Ok(config) => {
                return DiscoveredConfig {
                    config,
                    source: Some(path.clone()),
                    skipped,
                };
            }
            Err(e) => skipped.push(e),
        }
    }

    DiscoveredConfig {
        config: Config::default(),
        source: None,
        skipped,
    }
}
