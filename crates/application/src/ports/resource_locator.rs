//! Document source port.

/// Error type for resource lookups.
#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    /// No document exists under the identifier.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The document exists but reading it failed.
    #[error("IO error reading {resource}: {source}")]
    Io {
        /// Resource identifier
        resource: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Resolves an opaque resource identifier to the document text.
///
/// Implementations are called synchronously, once per load.
pub trait ResourceLocator: Send + Sync {
    /// Reads the whole document behind `resource`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if there is no such resource, or
    /// [`ResourceError::Io`] if reading it fails.
    fn read_to_string(&self, resource: &str) -> Result<String, ResourceError>;
}

impl<T: ResourceLocator + ?Sized> ResourceLocator for &T {
    fn read_to_string(&self, resource: &str) -> Result<String, ResourceError> {
        (**self).read_to_string(resource)
    }
}
