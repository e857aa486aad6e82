use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Each implementor wraps one independent PDF library. Several backends are
/// tried in order by `doctext_extract::PdfExtractor` until one succeeds.
pub trait PdfBackend: Send + Sync {
    /// Short stable identifier used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Extract the text of every page, concatenated in document order.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
