use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Log levels accepted for `logLevel`.
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace", "off"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Location of the persisted job record, relative to the working directory
    /// unless absolute.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
    /// Write the record through a temp file and rename.
    #[serde(default = "default_true")]
    pub atomic_save: bool,
    /// Default log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("job_data.json")
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            atomic_save: true,
            log_level: default_log_level(),
        }
    }
}
