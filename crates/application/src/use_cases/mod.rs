//! Application use cases (business logic orchestration).

mod load_collection;

pub use load_collection::*;
