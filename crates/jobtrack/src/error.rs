use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobtrackError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("Config validation failed: {message}")]
    Validation { message: String },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to load PDF: {0}")]
    ParsePdf(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read record '{path}': {source}")]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse record: {0}")]
    ParseRecord(#[source] serde_json::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write record '{path}': {source}")]
    WriteRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move record from '{from}' to '{to}': {source}")]
    PersistRecord {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Document path is not valid UTF-8 and cannot be saved: '{}'", path.display())]
    NonUtf8Path { path: PathBuf },

    #[error("Unknown stage: {0}")]
    UnknownStage(String),
}

pub type Result<T> = std::result::Result<T, JobtrackError>;
