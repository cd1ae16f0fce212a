//! Courier Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for document sources and decoders)
//! - The `{{variable}}` substitution engine
//! - Use case orchestration
//! - Application-level error handling

pub mod config;
pub mod error;
pub mod ports;
pub mod use_cases;
pub mod variable_resolver;

pub use config::LoaderConfig;
pub use error::{LoadError, LoadResult};
pub use ports::{CollectionDecoder, DecodedCollection, ResourceError, ResourceLocator};
pub use use_cases::{LoadCollection, LoadCollectionInput};
pub use variable_resolver::{ResolutionResult, VariableResolver, substitute};
