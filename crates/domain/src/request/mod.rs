//! HTTP Request domain types

mod body;
mod method;
mod query;
mod request_url;
mod spec;

pub use body::{Body, BodyMode, FormParameter};
pub use method::HttpMethod;
pub use query::QueryParam;
pub use request_url::{DEFAULT_PROTOCOL, RequestUrl, StructuredUrl, UrlSource};
pub use spec::Request;
