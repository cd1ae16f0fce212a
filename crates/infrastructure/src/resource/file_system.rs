//! File system resource locator.

use std::path::{Path, PathBuf};

use courier_application::ports::{ResourceError, ResourceLocator};

/// Resolves resource identifiers to files under a root directory.
///
/// Identifiers are always relative to the root; a leading `/` is ignored, so
/// `/SimpleRequest.json` and `SimpleRequest.json` name the same file.
#[derive(Debug, Clone)]
pub struct FileSystemLocator {
    root: PathBuf,
}

impl FileSystemLocator {
    /// Creates a locator rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the file path a resource identifier resolves to.
    #[must_use]
    pub fn resolve(&self, resource: &str) -> PathBuf {
        self.root.join(resource.trim_start_matches(['/', '\\']))
    }
}

impl Default for FileSystemLocator {
    fn default() -> Self {
        Self::new(".")
    }
}

impl ResourceLocator for FileSystemLocator {
    fn read_to_string(&self, resource: &str) -> Result<String, ResourceError> {
        let path = self.resolve(resource);
        tracing::debug!(resource, path = %path.display(), "reading collection document");

        std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(resource.to_string())
            } else {
                ResourceError::Io {
                    resource: resource.to_string(),
                    source: e,
                }
            }
        })
    }
}
