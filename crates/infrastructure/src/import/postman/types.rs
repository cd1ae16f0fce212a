//! Postman Collection v2.x Type Definitions
//!
//! This module defines the types that represent a Postman Collection JSON file.
//! All types use `#[serde(default)]` extensively to handle format variations gracefully;
//! unknown fields are ignored.

#![allow(missing_docs)]

use serde::Deserialize;
use std::collections::BTreeMap;

/// Root structure for a Postman Collection
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanCollection {
    pub info: PostmanInfo,
    #[serde(default)]
    pub item: Vec<PostmanItem>,
    /// Collection-level variables
    #[serde(default)]
    pub variable: Vec<PostmanVariable>,
}

/// Collection metadata
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub description: Option<PostmanDescription>,
}

/// Descriptions are either plain strings or `{content, type}` objects
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanDescription {
    Text(String),
    Rich {
        #[serde(default)]
        content: Option<String>,
    },
}

impl PostmanDescription {
    /// Get the description text
    #[must_use]
    pub fn into_content(self) -> Option<String> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rich { content } => content,
        }
    }
}

/// An item can be either a folder (containing more items) or a request
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<PostmanDescription>,
    /// If present, this item is a folder containing sub-items
    #[serde(default)]
    pub item: Option<Vec<Self>>,
    /// If present (and `item` is not), this item is a request.
    ///
    /// Kept as raw JSON (a URL string or a [`PostmanRequest`] object) so that
    /// shape errors can be reported against the item they belong to.
    #[serde(default)]
    pub request: Option<serde_json::Value>,
}

/// Postman Request definition
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanRequest {
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub url: Option<PostmanUrl>,
    #[serde(default)]
    pub header: Option<PostmanHeaders>,
    /// Alternative spelling of `header`; merged with it when both are present
    #[serde(default)]
    pub headers: Option<PostmanHeaders>,
    #[serde(default)]
    pub body: Option<PostmanBody>,
}

/// URL can be either a simple string or a structured object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanUrl {
    Simple(String),
    Structured(PostmanUrlStructured),
}

/// Structured URL object
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PostmanUrlStructured {
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub protocol: Option<String>,
    #[serde(default)]
    pub host: Option<PostmanSegments>,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub path: Option<PostmanSegments>,
    #[serde(default)]
    pub query: Vec<PostmanQueryParam>,
    #[serde(default)]
    pub hash: Option<String>,
}

/// Host and path are written either as one string or as a segment list
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanSegments {
    Joined(String),
    Parts(Vec<PostmanSegment>),
}

/// A path segment is a string or a `{type, value}` object
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanSegment {
    Text(String),
    Typed {
        #[serde(default)]
        value: Option<String>,
    },
}

impl PostmanSegment {
    /// Get the segment text
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Typed { value } => value.unwrap_or_default(),
        }
    }
}

/// Query parameter
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanQueryParam {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Headers are a list of entries, a name/value map, or a raw header block
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanHeaders {
    List(Vec<PostmanHeader>),
    Map(BTreeMap<String, String>),
    Block(String),
}

/// Request header
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanHeader {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// Request body
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanBody {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub raw: Option<String>,
    #[serde(default)]
    pub urlencoded: Option<Vec<PostmanFormParam>>,
    #[serde(default)]
    pub formdata: Option<Vec<PostmanFormParam>>,
}

/// Form parameter of a `urlencoded` or `formdata` body
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanFormParam {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    /// File source for `type: file` form-data fields
    #[serde(default)]
    pub src: Option<PostmanFileSrc>,
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

/// A form-data file source is one path or a list of paths
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostmanFileSrc {
    One(String),
    Many(Vec<String>),
}

impl PostmanFileSrc {
    /// Get the source as a single comma-separated string
    #[must_use]
    pub fn into_joined(self) -> String {
        match self {
            Self::One(src) => src,
            Self::Many(srcs) => srcs.join(","),
        }
    }
}

/// Collection-level variable definition
#[derive(Debug, Clone, Deserialize)]
pub struct PostmanVariable {
    #[serde(default)]
    pub key: Option<String>,
    /// Older exports name variables by `id` only
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
    #[serde(default)]
    pub disabled: bool,
}

impl PostmanVariable {
    /// Returns the variable as a name/value pair, if it is enabled and named.
    ///
    /// Non-string values are rendered as JSON text.
    #[must_use]
    pub fn into_pair(self) -> Option<(String, String)> {
        if self.disabled {
            return None;
        }
        let key = self.key.or(self.id).filter(|k| !k.is_empty())?;
        let value = match self.value {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
        };
        Some((key, value))
    }
}
