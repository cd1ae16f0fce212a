//! Collection document decoder port.

use courier_domain::Collection;

use crate::error::LoadResult;
use crate::variable_resolver::VariableResolver;

/// A decoded collection together with what substitution could not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCollection {
    /// The fully built, substituted collection.
    pub collection: Collection,
    /// Distinct placeholder names left unresolved, sorted.
    pub unresolved: Vec<String>,
}

/// Turns document text into a [`Collection`], substituting variables on the way.
pub trait CollectionDecoder: Send + Sync {
    /// Decodes `document`, applying `resolver` to every string field.
    ///
    /// # Errors
    ///
    /// Returns [`crate::LoadError::MalformedDocument`] for syntax or structure
    /// problems and [`crate::LoadError::InvalidUrl`] for URLs that do not parse.
    fn decode(&self, document: &str, resolver: &VariableResolver)
    -> LoadResult<DecodedCollection>;
}
