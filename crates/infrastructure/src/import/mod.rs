//! Collection document importers.

pub mod postman;

pub use postman::{PostmanCollection, PostmanDecoder};
