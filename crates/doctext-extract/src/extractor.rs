use std::path::Path;

use thiserror::Error;

use doctext_core::{BackendError, PdfBackend};

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("no PDF backend available")]
    NoBackends,
    /// Every backend failed; carries the last one's error.
    #[error("{backend}: {source}")]
    Exhausted {
        backend: &'static str,
        #[source]
        source: BackendError,
    },
}

/// Ordered list of PDF backends tried until one succeeds.
///
/// Different PDF libraries recover from different kinds of damaged or
/// unusually-encoded files, so each backend after the first is a fallback
/// for the ones before it. Earlier failures are logged and discarded; only
/// the last backend's error is surfaced.
pub struct PdfExtractor {
    backends: Vec<Box<dyn PdfBackend>>,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor {
    /// Create an extractor with no backends. Add them with [`with_backend`](Self::with_backend).
    pub fn new() -> Self {
        Self {
            backends: Vec::new(),
        }
    }

    /// Append a backend; it is tried after every backend added before it.
    pub fn with_backend(mut self, backend: impl PdfBackend + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn backend_names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn extract_text(&self, path: &Path) -> Result<String, ChainError> {
        let mut last_error = None;

        for (i, backend) in self.backends.iter().enumerate() {
            tracing::debug!(backend = backend.name(), path = %path.display(), "trying PDF backend");

            match backend.extract_text(path) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    if let Some(next) = self.backends.get(i + 1) {
                        tracing::warn!(
                            backend = backend.name(),
                            fallback = next.name(),
                            error = %e,
                            "PDF backend failed, falling back"
                        );
                    } else {
                        tracing::warn!(backend = backend.name(), error = %e, "last PDF backend failed");
                    }
                    last_error = Some((backend.name(), e));
                }
            }
        }

        match last_error {
            Some((backend, source)) => Err(ChainError::Exhausted { backend, source }),
            None => Err(ChainError::NoBackends),
        }
    }
}
