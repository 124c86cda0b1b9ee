//! Job store: added documents and the stage assigned to each job.

pub mod record;
pub mod stage;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::StoreError;
use crate::sanitize::redact_path;

pub use record::PersistedRecord;
pub use stage::Stage;

/// Outcome of [`JobStore::load`]. Every variant leaves the store usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// The record was read and applied.
    Loaded,
    /// No record exists yet; the store starts empty.
    Missing,
    /// A record exists but could not be read or parsed; the store starts empty.
    Malformed,
}

/// In-memory job state backed by a JSON record on disk.
#[derive(Debug, Clone)]
pub struct JobStore {
    path: PathBuf,
    atomic_save: bool,
    documents: Vec<PathBuf>,
    stages: BTreeMap<String, Stage>,
}

impl JobStore {
    /// Creates an empty store that persists to `path`. Nothing is read.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            atomic_save: true,
            documents: Vec::new(),
            stages: BTreeMap::new(),
        }
    }

    /// Creates a store for `path` and loads whatever record is there.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self::new(path);
        store.load();
        store
    }

    /// Whether saves go through a temp file and rename.
    pub fn with_atomic_save(mut self, atomic: bool) -> Self {
        self.atomic_save = atomic;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the in-memory state with the record on disk.
    ///
    /// Never fails: a missing or unreadable record resets the store to empty.
    pub fn load(&mut self) -> LoadStatus {
        let _span = tracing::info_span!("store.load", file = %redact_path(&self.path)).entered();

        self.documents.clear();
        self.stages.clear();

        let record = match record::read_record(&self.path) {
            Ok(record) => record,
            Err(StoreError::ReadRecord { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                info!(
                    "No existing data file at {}, starting fresh",
                    self.path.display()
                );
                return LoadStatus::Missing;
            }
            Err(e) => {
                warn!("Ignoring unreadable data file: {}", e);
                return LoadStatus::Malformed;
            }
        };

        self.documents = record.uploaded_files.into_iter().map(PathBuf::from).collect();

        for (job_name, label) in record.job_stages_state {
            match label.parse::<Stage>() {
                Ok(stage) => {
                    self.stages.insert(job_name, stage);
                }
                Err(_) => {
                    warn!(
                        "Dropping unknown stage '{}' for job '{}'; it will be removed from {} on the next save",
                        label,
                        job_name,
                        self.path.display()
                    );
                }
            }
        }

        debug!(
            "Loaded {} documents and {} job stages",
            self.documents.len(),
            self.stages.len()
        );
        LoadStatus::Loaded
    }

    /// Writes the current state to disk, overwriting any previous record.
    pub fn save(&self) -> Result<(), StoreError> {
        let _span = tracing::info_span!("store.save", file = %redact_path(&self.path)).entered();

        record::write_record(&self.path, &self.to_record()?, self.atomic_save)?;

        debug!(
            "Saved {} documents and {} job stages",
            self.documents.len(),
            self.stages.len()
        );
        Ok(())
    }

    /// Snapshot of the current state in its on-disk shape.
    ///
    /// Fails on a document path that is not valid UTF-8, since the JSON
    /// record cannot hold it unchanged.
    pub fn to_record(&self) -> Result<PersistedRecord, StoreError> {
        let uploaded_files = self
            .documents
            .iter()
            .map(|p| {
                p.to_str()
                    .map(str::to_string)
                    .ok_or_else(|| StoreError::NonUtf8Path { path: p.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PersistedRecord {
            uploaded_files,
            job_stages_state: self
                .stages
                .iter()
                .map(|(name, stage)| (name.clone(), stage.as_str().to_string()))
                .collect(),
        })
    }

    /// Records a newly added document. Duplicates are kept.
    pub fn add_document<P: AsRef<Path>>(&mut self, path: P) {
        self.documents.push(path.as_ref().to_path_buf());
    }

    pub fn documents(&self) -> &[PathBuf] {
        &self.documents
    }

    /// Assigns `stage` to `job_name`, replacing any earlier assignment.
    pub fn set_stage(&mut self, job_name: &str, stage: Stage) {
        self.stages.insert(job_name.to_string(), stage);
    }

    /// Like [`set_stage`](Self::set_stage) but takes a label, rejecting
    /// anything outside the seven known stages.
    pub fn set_stage_label(&mut self, job_name: &str, label: &str) -> Result<Stage, StoreError> {
        let stage = label.parse::<Stage>()?;
        self.set_stage(job_name, stage);
        Ok(stage)
    }

    /// The stage of `job_name`, or `None` if it was never assigned.
    pub fn get_stage(&self, job_name: &str) -> Option<Stage> {
        self.stages.get(job_name).copied()
    }

    pub fn stages(&self) -> &BTreeMap<String, Stage> {
        &self.stages
    }
}
