//! Courier Domain - Core collection types
//!
//! This crate defines the in-memory model of an API collection: folders,
//! requests, URLs and bodies. All types here are pure Rust with no I/O
//! dependencies.

pub mod collection;
pub mod error;
pub mod request;

pub use collection::{Collection, Folder, Information, ItemNode, RequestItem};
pub use error::{DomainError, DomainResult};
pub use request::{
    Body, BodyMode, FormParameter, HttpMethod, QueryParam, Request, RequestUrl, StructuredUrl,
    UrlSource,
};
