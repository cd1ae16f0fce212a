//! Postman document decoder

use serde::Deserialize;
use serde_json::error::Category;

use courier_application::variable_resolver::VariableResolver;
use courier_application::{CollectionDecoder, DecodedCollection, LoadError, LoadResult};

use super::mapper::CollectionMapper;
use super::types::{PostmanCollection, PostmanVariable};

/// Decodes Postman Collection v2.0/v2.1 JSON documents.
///
/// Variables declared in the collection's own `variable` list act as
/// defaults; caller-supplied values take precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostmanDecoder;

impl PostmanDecoder {
    /// Creates a new decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CollectionDecoder for PostmanDecoder {
    fn decode(
        &self,
        document: &str,
        resolver: &VariableResolver,
    ) -> LoadResult<DecodedCollection> {
        let mut collection = parse_document(document).map_err(json_error)?;

        let defaults: Vec<(String, String)> = std::mem::take(&mut collection.variable)
            .into_iter()
            .filter_map(PostmanVariable::into_pair)
            .collect();

        if defaults.is_empty() {
            CollectionMapper::new(resolver).map_collection(collection)
        } else {
            tracing::debug!(count = defaults.len(), "using collection variables as defaults");
            let resolver = resolver.with_defaults(defaults);
            CollectionMapper::new(&resolver).map_collection(collection)
        }
    }
}

/// Parses the document without a nesting limit; the stack grows on demand
/// instead, so folder depth is bounded only by memory.
fn parse_document(document: &str) -> serde_json::Result<PostmanCollection> {
    let mut json = serde_json::Deserializer::from_str(document);
    json.disable_recursion_limit();
    let collection = PostmanCollection::deserialize(serde_stacker::Deserializer::new(&mut json))?;
    json.end()?;
    Ok(collection)
}

fn json_error(err: serde_json::Error) -> LoadError {
    let location = format!("line {}, column {}", err.line(), err.column());
    let message = match err.classify() {
        Category::Syntax | Category::Eof => format!("invalid JSON: {err}"),
        Category::Data => format!("unexpected document structure: {err}"),
        Category::Io => err.to_string(),
    };
    LoadError::malformed(location, message)
}
