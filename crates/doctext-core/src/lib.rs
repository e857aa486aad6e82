//! Shared seam between the extraction pipeline and the PDF engines.
//!
//! Engine crates (`doctext-pdf-mupdf`, `doctext-pdf-lopdf`) depend only on
//! this crate, so pulling in one engine never drags in another.

pub mod backend;

pub use backend::{BackendError, PdfBackend};
