//! Application error types

use thiserror::Error;

use crate::ports::ResourceError;

/// Errors that end a collection load.
///
/// Every variant is terminal: no partial collection is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The resource locator could not find the document.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    /// The document exists but could not be read.
    #[error("failed to read resource {resource}: {source}")]
    ResourceUnreadable {
        /// Resource identifier
        resource: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document exceeds the configured size limit.
    #[error("document too large: {size} bytes exceeds maximum of {max} bytes")]
    DocumentTooLarge {
        /// Actual document size in bytes
        size: usize,
        /// Maximum allowed size in bytes
        max: usize,
    },

    /// The document is not valid JSON or breaks the collection structure.
    #[error("malformed document at {path}: {message}")]
    MalformedDocument {
        /// Location of the problem (item path or line:column)
        path: String,
        /// What is wrong
        message: String,
    },

    /// A URL field does not parse after substitution.
    #[error("invalid URL at {path}: {message}")]
    InvalidUrl {
        /// Item path and field of the URL
        path: String,
        /// The URL text after substitution
        url: String,
        /// Parser message
        message: String,
    },
}

impl LoadError {
    /// Creates a [`LoadError::MalformedDocument`].
    #[must_use]
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a [`LoadError::InvalidUrl`].
    #[must_use]
    pub fn invalid_url(
        path: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidUrl {
            path: path.into(),
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns the item path or document location the error refers to, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MalformedDocument { path, .. } | Self::InvalidUrl { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<ResourceError> for LoadError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(resource) => Self::ResourceNotFound(resource),
            ResourceError::Io { resource, source } => Self::ResourceUnreadable { resource, source },
        }
    }
}

/// Result type alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;
