use std::path::Path;

use crate::error::ExtractError;
use crate::processor::TextExtractor;
use crate::sanitize::redact_path;

/// Reads embedded text from PDF files with `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let _span = tracing::info_span!("processor.pdf", file = %redact_path(path)).entered();

        let pdf_bytes = std::fs::read(path).map_err(|e| ExtractError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc = lopdf::Document::load_mem(&pdf_bytes)
            .map_err(|e| ExtractError::ParsePdf(e.to_string()))?;

        Ok(extract_text_from_pdf(&doc))
    }
}

/// Concatenates the text of every page. Pages whose text cannot be decoded
/// are skipped.
fn extract_text_from_pdf(doc: &lopdf::Document) -> String {
    let mut text = String::new();

    for (page_num, _) in doc.get_pages() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => {
                text.push_str(&page_text);
                text.push('\n');
            }
            Err(e) => {
                log::debug!("Skipping page {} without readable text: {}", page_num, e);
            }
        }
    }

    text
}
