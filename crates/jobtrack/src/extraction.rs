//! Job name extraction from document text.
//!
//! A job name comes from lines carrying a `Name:` label. The text after the
//! first `Name:` on each such line is a candidate. With one candidate that is
//! the name; with more, the second and first candidates are joined as
//! `"{second} - {first}"` and the rest are ignored.

use std::path::Path;

use crate::processor::TextExtractor;
use crate::sanitize::redact_path;

/// Label that marks a line as carrying a job name.
pub const NAME_MARKER: &str = "Name:";

/// Display name used when a document has no `Name:` line.
pub const NO_JOB_NAME: &str = "No Job Name Found";

/// Prefix of the display name shown for documents that could not be read.
pub const READ_ERROR_PREFIX: &str = "Error reading PDF: ";

/// Result of extracting a job name from one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// A display name, possibly the [`NO_JOB_NAME`] placeholder.
    Name(String),
    /// Text could not be extracted; holds the error description.
    Failed(String),
}

impl Extraction {
    /// The string shown in the job list.
    pub fn display_name(&self) -> String {
        match self {
            Extraction::Name(name) => name.clone(),
            Extraction::Failed(message) => format!("{}{}", READ_ERROR_PREFIX, message),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }
}

/// Candidate names in the order their lines appear in `text`.
pub fn job_name_candidates(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|line| line.split_once(NAME_MARKER))
        .map(|(_, rest)| rest.trim())
        .collect()
}

/// Builds the display name for a document's text.
pub fn compose_job_name(text: &str) -> String {
    match job_name_candidates(text).as_slice() {
        [] => NO_JOB_NAME.to_string(),
        [only] => (*only).to_string(),
        [first, second, ..] => format!("{} - {}", second, first),
    }
}

/// Extracts the job name of the document at `path`.
///
/// Never fails: extraction errors come back as [`Extraction::Failed`].
pub fn extract_job_name<E: TextExtractor + ?Sized>(extractor: &E, path: &Path) -> Extraction {
    let _span = tracing::info_span!("extraction.job_name", file = %redact_path(path)).entered();

    match extractor.extract_text(path) {
        Ok(text) => {
            let name = compose_job_name(&text);
            log::debug!("Extracted job name '{}'", name);
            Extraction::Name(name)
        }
        Err(e) => {
            log::warn!("Failed to extract text from {}: {}", path.display(), e);
            Extraction::Failed(e.to_string())
        }
    }
}
