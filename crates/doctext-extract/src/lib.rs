pub mod cleaner;
pub mod docx;
pub mod extractor;
pub mod txt;

pub use cleaner::{CharClass, Cleaner, clean_text};
pub use docx::{DocxError, extract_docx};
pub use extractor::{ChainError, PdfExtractor};
pub use txt::{TxtError, extract_txt};
// Re-export the backend seam so callers only need this crate
pub use doctext_core::{BackendError, PdfBackend};
