use std::fmt;
use std::path::Path;

use thiserror::Error;

use doctext_extract::{ChainError, DocxError, PdfExtractor, TxtError};

// Re-export the pipeline pieces callers need alongside dispatch
pub use doctext_extract::{CharClass, Cleaner, clean_text};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported file format {0}")]
    UnsupportedFormat(String),
    #[error("Failed to extract text from PDF: {0}")]
    Pdf(ChainError),
    #[error("Failed to extract text from DOCX: {0}")]
    Docx(DocxError),
    #[error("Failed to extract text from TXT: {0}")]
    Txt(TxtError),
}

/// Document kinds recognized by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pdf,
    /// Both `.docx` and `.doc`. Legacy binary `.doc` files fail in the
    /// DOCX extractor rather than being rejected here.
    Docx,
    Txt,
}

impl Format {
    /// Match an extension case-insensitively. A leading dot is optional.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.strip_prefix('.').unwrap_or(ext).to_lowercase();
        match ext.as_str() {
            "pdf" => Some(Format::Pdf),
            "doc" | "docx" => Some(Format::Docx),
            "txt" => Some(Format::Txt),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Pdf => "PDF",
            Format::Docx => "DOCX",
            Format::Txt => "TXT",
        })
    }
}

/// The PDF engines compiled into this build, primary first.
///
/// MuPDF (feature `mupdf`) is tried first and lopdf (feature `lopdf`)
/// second. With neither feature enabled the chain is empty and every PDF
/// fails with [`ChainError::NoBackends`].
pub fn default_pdf_extractor() -> PdfExtractor {
    let extractor = PdfExtractor::new();
    #[cfg(feature = "mupdf")]
    let extractor = extractor.with_backend(doctext_pdf_mupdf::MupdfBackend::new());
    #[cfg(feature = "lopdf")]
    let extractor = extractor.with_backend(doctext_pdf_lopdf::LopdfBackend::new());
    if extractor.is_empty() {
        tracing::warn!("built without the mupdf and lopdf features; PDF extraction will fail");
    }
    extractor
}

/// Extract the raw (uncleaned) text of a PDF, DOC/DOCX or TXT file.
///
/// Dispatches on the lowercase file extension:
/// - `.pdf` → [`default_pdf_extractor`]
/// - `.doc` / `.docx` → DOCX paragraph extractor
/// - `.txt` → UTF-8 reader
/// - anything else → [`IngestError::UnsupportedFormat`], without touching the file
pub fn extract_text(path: &Path) -> Result<String, IngestError> {
    extract_with(path, &default_pdf_extractor())
}

/// Like [`extract_text`], with a caller-supplied PDF backend chain.
pub fn extract_with(path: &Path, pdf: &PdfExtractor) -> Result<String, IngestError> {
    let format = Format::from_path(path)
        .ok_or_else(|| IngestError::UnsupportedFormat(display_extension(path)))?;

    tracing::debug!(path = %path.display(), %format, "extracting");

    match format {
        Format::Pdf => pdf.extract_text(path).map_err(IngestError::Pdf),
        Format::Docx => doctext_extract::extract_docx(path).map_err(IngestError::Docx),
        Format::Txt => doctext_extract::extract_txt(path).map_err(IngestError::Txt),
    }
}

/// Lowercased extension with its leading dot, for error messages.
fn display_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => "(no extension)".to_string(),
    }
}
