use std::path::Path;

use lopdf::Document;

use doctext_core::{BackendError, PdfBackend};

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

/// `lopdf`-based implementation of [`PdfBackend`].
///
/// Parses the PDF object graph independently of MuPDF, so it can recover
/// text from files the primary engine rejects (and vice versa). Only failing
/// to load the document is fatal: a page whose content cannot be decoded
/// contributes an empty string, the same as a page with no text at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for LopdfBackend {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let document = Document::load(path).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        let mut empty_pages = 0usize;

        // get_pages() is keyed by 1-based page number, so iteration is in document order
        let pages = document.get_pages();
        for &page_number in pages.keys() {
            match document.extract_text(&[page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    empty_pages += 1;
                    tracing::debug!(page = page_number, error = %e, "no extractable text on page");
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            pages = pages.len(),
            empty_pages,
            chars = text.len(),
            "lopdf extracted text"
        );

        Ok(text)
    }
}
