//! The job board: the visible job list and the handlers behind each UI action.
//!
//! Front-ends own a [`JobBoard`] and call one method per user action. Each
//! method returns what the front-end should render; none of them panic or
//! surface extraction errors.

use std::path::Path;

use serde::Serialize;

use crate::config::Config;
use crate::error::StoreError;
use crate::extraction::{extract_job_name, Extraction};
use crate::processor::{PdfTextExtractor, TextExtractor};
use crate::store::{JobStore, Stage};

/// One stage button of a job's stage panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageButton {
    pub stage: Stage,
    /// Set on the button matching the job's current stage.
    pub highlighted: bool,
}

/// The stage buttons shown for a selected job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StagePanel {
    pub job_name: String,
    pub buttons: Vec<StageButton>,
}

impl StagePanel {
    /// The highlighted stage, if the job has one.
    pub fn current(&self) -> Option<Stage> {
        self.buttons.iter().find(|b| b.highlighted).map(|b| b.stage)
    }
}

pub struct JobBoard<E: TextExtractor = PdfTextExtractor> {
    store: JobStore,
    extractor: E,
    entries: Vec<String>,
}

impl JobBoard<PdfTextExtractor> {
    /// Opens the store named by `config` and rebuilds the job list from it.
    pub fn open(config: &Config) -> Self {
        let store = JobStore::open(&config.data_file).with_atomic_save(config.atomic_save);
        let mut board = Self::with_extractor(store, PdfTextExtractor::new());
        board.restore();
        board
    }
}

impl<E: TextExtractor> JobBoard<E> {
    /// Wraps an already loaded store. The job list starts empty; call
    /// [`restore`](Self::restore) to fill it from the store's documents.
    pub fn with_extractor(store: JobStore, extractor: E) -> Self {
        Self {
            store,
            extractor,
            entries: Vec::new(),
        }
    }

    /// Re-extracts every stored document, in order, to rebuild the job list.
    pub fn restore(&mut self) {
        let _span = tracing::info_span!("board.restore").entered();

        self.entries = self
            .store
            .documents()
            .iter()
            .map(|path| extract_job_name(&self.extractor, path).display_name())
            .collect();

        log::info!("Restored {} jobs", self.entries.len());
    }

    /// Records `path` and adds its job name to the list.
    ///
    /// The path is stored even when no name is found or the file is unreadable.
    pub fn add_pdf<P: AsRef<Path>>(&mut self, path: P) -> &str {
        let path = path.as_ref();
        self.store.add_document(path);

        let extraction = extract_job_name(&self.extractor, path);
        if let Extraction::Failed(_) = extraction {
            log::info!("Added unreadable document {}", path.display());
        }

        let index = self.entries.len();
        self.entries.push(extraction.display_name());
        &self.entries[index]
    }

    /// Job names in list order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The stage panel for the job at list position `index`.
    pub fn select_job(&self, index: usize) -> Option<StagePanel> {
        self.entries.get(index).map(|name| self.stage_panel(name))
    }

    /// Assigns `stage` to `job_name` and returns the refreshed panel.
    pub fn select_stage(&mut self, job_name: &str, stage: Stage) -> StagePanel {
        self.store.set_stage(job_name, stage);
        log::debug!("Job '{}' moved to {}", job_name, stage);
        self.stage_panel(job_name)
    }

    /// The seven stage buttons for `job_name`, with its current stage
    /// highlighted.
    pub fn stage_panel(&self, job_name: &str) -> StagePanel {
        let current = self.store.get_stage(job_name);
        StagePanel {
            job_name: job_name.to_string(),
            buttons: Stage::ALL
                .into_iter()
                .map(|stage| StageButton {
                    stage,
                    highlighted: current == Some(stage),
                })
                .collect(),
        }
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// Flushes the store to disk.
    pub fn save(&self) -> Result<(), StoreError> {
        self.store.save()
    }

    /// Flushes the store and consumes the board.
    pub fn close(self) -> Result<(), StoreError> {
        self.store.save()?;
        log::info!("Saved {} jobs on close", self.entries.len());
        Ok(())
    }
}
