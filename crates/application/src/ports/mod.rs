//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod collection_decoder;
mod resource_locator;

pub use collection_decoder::{CollectionDecoder, DecodedCollection};
pub use resource_locator::{ResourceError, ResourceLocator};
