//! Request URL model
//!
//! A collection URL is written either as a single string or as a structured
//! object of protocol, host segments, path segments and query parameters.
//! Both shapes normalize to one rendered string that is also parsed into a
//! [`url::Url`] for inspection, so the two views can never disagree.

use serde::{Serialize, Serializer};
use std::fmt;
use url::Url;

use super::QueryParam;
use crate::error::{DomainError, DomainResult};

/// Protocol used when a URL does not name one.
pub const DEFAULT_PROTOCOL: &str = "http";

/// The structured form of a collection URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredUrl {
    /// Protocol, with or without a trailing `://`
    pub protocol: Option<String>,
    /// Host segments, joined with `.`
    pub host: Vec<String>,
    /// Optional port
    pub port: Option<String>,
    /// Path segments, joined with `/`
    pub path: Vec<String>,
    /// Query parameters in document order
    pub query: Vec<QueryParam>,
    /// Optional fragment
    pub hash: Option<String>,
    /// Raw string form, used only when there are no host segments
    pub raw: Option<String>,
}

impl StructuredUrl {
    /// Creates a structured URL from host and path segments.
    #[must_use]
    pub fn new<H, P>(host: H, path: P) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            host: host.into_iter().map(Into::into).collect(),
            path: path.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the protocol.
    #[must_use]
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, param: QueryParam) -> Self {
        self.query.push(param);
        self
    }

    /// Assembles the URL string from its parts.
    ///
    /// Returns `None` when there are no host segments to build from.
    #[must_use]
    pub fn render(&self) -> Option<String> {
        if self.host.is_empty() {
            return None;
        }

        let protocol = self
            .protocol
            .as_deref()
            .map(|p| p.trim_end_matches("://").trim_end_matches(':'))
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROTOCOL);

        let mut url = format!("{protocol}://{}", self.host.join("."));
        if let Some(port) = self.port.as_deref().filter(|p| !p.is_empty()) {
            url.push(':');
            url.push_str(port);
        }
        if !self.path.is_empty() {
            url.push('/');
            url.push_str(&self.path.join("/"));
        }

        let query: Vec<String> = self
            .query
            .iter()
            .filter(|q| !q.disabled)
            .map(QueryParam::render)
            .collect();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        if let Some(hash) = self.hash.as_deref().filter(|h| !h.is_empty()) {
            url.push('#');
            url.push_str(hash);
        }

        Some(url)
    }
}

/// Where a [`RequestUrl`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSource {
    /// A plain URL string
    Raw(String),
    /// A structured URL object
    Structured(StructuredUrl),
}

/// A resolved request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    source: UrlSource,
    rendered: String,
    parsed: Url,
}

impl RequestUrl {
    /// Parses a plain URL string.
    ///
    /// A string without a scheme is taken to be an `http` URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the string is not a valid URL.
    pub fn parse(text: impl Into<String>) -> DomainResult<Self> {
        let text = text.into();
        let rendered = with_default_scheme(&text);
        Self::build(UrlSource::Raw(text), rendered)
    }

    /// Builds a URL from its structured form.
    ///
    /// The parts take precedence over the embedded raw string, which is used
    /// only when there are no host segments.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidUrl`] if the assembled URL does not parse.
    pub fn from_structured(structured: StructuredUrl) -> DomainResult<Self> {
        let rendered = match structured.render() {
            Some(rendered) => rendered,
            None => with_default_scheme(structured.raw.as_deref().unwrap_or_default()),
        };
        Self::build(UrlSource::Structured(structured), rendered)
    }

    fn build(source: UrlSource, rendered: String) -> DomainResult<Self> {
        if rendered.is_empty() {
            return Err(DomainError::InvalidUrl("empty URL".to_string()));
        }
        let parsed =
            Url::parse(&rendered).map_err(|e| DomainError::InvalidUrl(format!("{rendered}: {e}")))?;
        Ok(Self {
            source,
            rendered,
            parsed,
        })
    }

    /// Returns the assembled URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.parsed
    }

    /// Returns the form this URL was written in.
    #[must_use]
    pub const fn source(&self) -> &UrlSource {
        &self.source
    }

    /// Returns the URL scheme, e.g. `http`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.parsed.scheme()
    }

    /// Returns the host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }

    /// Returns the explicit or scheme-default port.
    #[must_use]
    pub fn port(&self) -> Option<u16> {
        self.parsed.port_or_known_default()
    }

    /// Returns the path, always starting with `/`.
    #[must_use]
    pub fn path(&self) -> &str {
        self.parsed.path()
    }

    /// Returns the query string without the leading `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.parsed.query()
    }
}

fn with_default_scheme(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() || has_scheme(text) {
        text.to_string()
    } else {
        format!("{DEFAULT_PROTOCOL}://{text}")
    }
}

/// A scheme separator only counts before the path, query or fragment starts.
fn has_scheme(text: &str) -> bool {
    text.find("://")
        .is_some_and(|at| !text[..at].contains(['/', '?', '#']))
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl Serialize for RequestUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.rendered)
    }
}
