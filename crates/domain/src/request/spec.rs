//! Request specification type

use serde::Serialize;
use std::collections::BTreeMap;

use super::{Body, HttpMethod, RequestUrl};

/// A single HTTP request of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Request {
    /// HTTP method
    pub method: HttpMethod,
    /// Target URL
    pub url: RequestUrl,
    /// HTTP headers; keys are case-sensitive as written
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// Request body
    pub body: Body,
}

impl Request {
    /// Creates a `GET` request with no headers and an empty body.
    #[must_use]
    pub fn new(url: RequestUrl) -> Self {
        Self {
            method: HttpMethod::default(),
            url,
            headers: BTreeMap::new(),
            body: Body::None,
        }
    }

    /// Sets the method.
    #[must_use]
    pub const fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header, replacing any previous value under the same key.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    /// Returns a header value by exact key.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}
