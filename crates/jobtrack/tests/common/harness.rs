//! Test harness for isolated test execution.
//!
//! Each `TestHarness` owns a temp directory holding the job record and any
//! PDFs a test writes.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use jobtrack::{Config, JobBoard};

use super::PdfBuilder;

pub struct TestHarness {
    temp_dir: TempDir,
    /// Where generated PDFs go.
    pub docs_dir: PathBuf,
    /// Path of the persisted job record.
    pub data_file: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let docs_dir = temp_dir.path().join("docs");
        std::fs::create_dir_all(&docs_dir).expect("Failed to create docs directory");
        let data_file = temp_dir.path().join("job_data.json");

        Self {
            temp_dir,
            docs_dir,
            data_file,
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config(&self) -> Config {
        Config {
            data_file: self.data_file.clone(),
            ..Config::default()
        }
    }

    /// Open a board over this harness's record, as the app does at startup.
    pub fn open_board(&self) -> JobBoard {
        JobBoard::open(&self.config())
    }

    /// Write a PDF with the given text lines.
    pub fn pdf(&self, file_name: &str, lines: &[&str]) -> PathBuf {
        lines
            .iter()
            .fold(PdfBuilder::new(), |builder, line| builder.line(line))
            .write_to(&self.docs_dir, file_name)
    }

    /// Write a file that has a `.pdf` name but is not a PDF.
    pub fn corrupt_pdf(&self, file_name: &str) -> PathBuf {
        let path = self.docs_dir.join(file_name);
        std::fs::write(&path, b"%PDF-1.5 truncated garbage").expect("Failed to write file");
        path
    }
}
