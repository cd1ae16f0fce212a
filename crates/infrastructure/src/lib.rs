//! Courier Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer: a Postman collection decoder and
//! resource locators for the file system and memory.

pub mod import;
pub mod resource;

use std::path::PathBuf;

use courier_application::LoadCollection;

pub use import::{PostmanCollection, PostmanDecoder};
pub use resource::{FileSystemLocator, InMemoryLocator};

/// A collection loader reading Postman documents through `L`.
pub type CollectionLoader<L = FileSystemLocator> = LoadCollection<L, PostmanDecoder>;

/// Creates a loader for Postman documents stored under `root`.
#[must_use]
pub fn file_loader(root: impl Into<PathBuf>) -> CollectionLoader {
    LoadCollection::new(FileSystemLocator::new(root), PostmanDecoder::new())
}

/// Creates a loader over documents held in memory.
#[must_use]
pub fn memory_loader(locator: InMemoryLocator) -> CollectionLoader<InMemoryLocator> {
    LoadCollection::new(locator, PostmanDecoder::new())
}
