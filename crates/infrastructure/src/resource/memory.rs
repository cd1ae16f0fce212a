//! In-memory resource locator.

use std::collections::HashMap;

use courier_application::ports::{ResourceError, ResourceLocator};

/// Serves documents held in memory, keyed by resource identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocator {
    documents: HashMap<String, String>,
}

impl InMemoryLocator {
    /// Creates an empty locator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document.
    #[must_use]
    pub fn with_document(mut self, resource: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(resource, text);
        self
    }

    /// Adds or replaces a document.
    pub fn insert(&mut self, resource: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(resource.into(), text.into());
    }
}

impl ResourceLocator for InMemoryLocator {
    fn read_to_string(&self, resource: &str) -> Result<String, ResourceError> {
        self.documents
            .get(resource)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(resource.to_string()))
    }
}
