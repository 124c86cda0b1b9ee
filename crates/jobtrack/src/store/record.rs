//! On-disk snapshot of the job store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// The persisted record: every added document plus the stage of every job.
///
/// Stage values are kept as raw labels here so a single unknown label does
/// not make the whole record unreadable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    /// Paths of added PDFs, in the order they were added.
    #[serde(default)]
    pub uploaded_files: Vec<String>,
    /// Job display name to stage label.
    #[serde(default)]
    pub job_stages_state: BTreeMap<String, String>,
}

/// Reads and parses the record at `path`.
pub fn read_record(path: &Path) -> Result<PersistedRecord, StoreError> {
    let content = std::fs::read_to_string(path).map_err(|e| StoreError::ReadRecord {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(StoreError::ParseRecord)
}

/// Writes the record to `path`, replacing whatever is there.
///
/// With `atomic` set the JSON is written to a sibling temp file first and
/// renamed over the target, so a crash mid-write leaves the old record intact.
pub fn write_record(path: &Path, record: &PersistedRecord, atomic: bool) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(record).map_err(StoreError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    if !atomic {
        return std::fs::write(path, json).map_err(|e| StoreError::WriteRecord {
            path: path.to_path_buf(),
            source: e,
        });
    }

    let temp_path = temp_path_for(path);
    std::fs::write(&temp_path, json).map_err(|e| StoreError::WriteRecord {
        path: temp_path.clone(),
        source: e,
    })?;

    if let Err(e) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(StoreError::PersistRecord {
            from: temp_path,
            to: path.to_path_buf(),
            source: e,
        });
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("job_data.json");
    path.with_file_name(format!(".{}.tmp", file_name))
}
