pub mod pdf;

use std::path::Path;

use crate::error::ExtractError;

pub use pdf::PdfTextExtractor;

/// Source of raw document text for job name extraction.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// File picker filter: true when the path has a `.pdf` extension.
///
/// Only the extension is checked; the content is not inspected.
pub fn is_pdf_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
