//! Load collection use case.

use std::collections::HashMap;

use courier_domain::Collection;

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::ports::{CollectionDecoder, ResourceLocator};
use crate::variable_resolver::VariableResolver;

/// Input for loading a collection.
#[derive(Debug, Clone, Default)]
pub struct LoadCollectionInput {
    /// Identifier handed to the resource locator.
    pub resource: String,
    /// Values for `{{name}}` placeholders.
    pub variables: HashMap<String, String>,
}

impl LoadCollectionInput {
    /// Creates an input with no variables.
    #[must_use]
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            variables: HashMap::new(),
        }
    }

    /// Adds a variable.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }
}

/// Use case for loading a collection document into the domain model.
///
/// Reads the document through the locator, decodes it with placeholders
/// substituted, and returns the finished tree. Either the whole collection is
/// returned or an error is.
pub struct LoadCollection<L: ResourceLocator, D: CollectionDecoder> {
    locator: L,
    decoder: D,
    config: LoaderConfig,
}

impl<L: ResourceLocator, D: CollectionDecoder> LoadCollection<L, D> {
    /// Creates a new `LoadCollection` use case with the default configuration.
    #[must_use]
    pub fn new(locator: L, decoder: D) -> Self {
        Self {
            locator,
            decoder,
            config: LoaderConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the collection named by `input.resource`.
    ///
    /// # Errors
    /// - [`LoadError::ResourceNotFound`] if the locator has no such resource
    /// - [`LoadError::ResourceUnreadable`] if reading fails
    /// - [`LoadError::DocumentTooLarge`] if the document exceeds the size limit
    /// - [`LoadError::MalformedDocument`] / [`LoadError::InvalidUrl`] from decoding
    pub fn execute(&self, input: LoadCollectionInput) -> LoadResult<Collection> {
        let resolver = VariableResolver::from(input.variables);
        self.load(&input.resource, &resolver)
    }

    /// Loads a collection with an existing resolver.
    ///
    /// # Errors
    ///
    /// Same as [`LoadCollection::execute`].
    pub fn load(&self, resource: &str, resolver: &VariableResolver) -> LoadResult<Collection> {
        tracing::debug!(resource, variables = resolver.len(), "loading collection");

        let document = self.locator.read_to_string(resource)?;
        if document.len() > self.config.max_document_size {
            return Err(LoadError::DocumentTooLarge {
                size: document.len(),
                max: self.config.max_document_size,
            });
        }

        let decoded = self.decoder.decode(&document, resolver)?;
        if !decoded.unresolved.is_empty() {
            tracing::warn!(
                resource,
                unresolved = ?decoded.unresolved,
                "collection has unresolved placeholders"
            );
        }

        let collection = decoded.collection;
        tracing::debug!(
            resource,
            name = %collection.info.name,
            requests = collection.request_count(),
            folders = collection.folder_count(),
            "collection loaded"
        );
        Ok(collection)
    }
}
