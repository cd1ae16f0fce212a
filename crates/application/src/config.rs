//! Loader configuration

/// Default maximum document size (10 MiB).
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Collection loader configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Maximum document size in bytes (default: 10 MiB)
    pub max_document_size: usize,
}

impl LoaderConfig {
    /// Sets the maximum document size.
    #[must_use]
    pub const fn with_max_document_size(mut self, max_document_size: usize) -> Self {
        self.max_document_size = max_document_size;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
        }
    }
}
