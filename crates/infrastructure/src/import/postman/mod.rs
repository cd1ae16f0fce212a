//! Postman Import Module
//!
//! This module reads Postman Collection v2.0/v2.1 JSON documents into the
//! Courier domain model.

pub mod decoder;
pub mod mapper;
pub mod types;

pub use decoder::PostmanDecoder;
pub use mapper::CollectionMapper;
pub use types::PostmanCollection;
