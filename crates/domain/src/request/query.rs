//! Query parameter types

use serde::{Deserialize, Serialize};

/// A query parameter key-value pair of a structured URL.
///
/// Disabled parameters are retained but left out of the rendered URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value; a missing value renders as the bare key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Whether this parameter is disabled
    #[serde(default)]
    pub disabled: bool,
}

impl QueryParam {
    /// Creates a new enabled query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            disabled: false,
        }
    }

    /// Creates a disabled query parameter.
    #[must_use]
    pub fn disabled(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            disabled: true,
            ..Self::new(key, value)
        }
    }

    /// Renders the parameter as `key=value`, or `key` without a value.
    #[must_use]
    pub fn render(&self) -> String {
        match &self.value {
            Some(value) => format!("{}={}", self.key, value),
            None => self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_creation() {
        let param = QueryParam::new("page", "1");
        assert_eq!(param.key, "page");
        assert_eq!(param.value.as_deref(), Some("1"));
        assert!(!param.disabled);
    }

    #[test]
    fn test_disabled_param() {
        let param = QueryParam::disabled("debug", "true");
        assert!(param.disabled);
    }

    #[test]
    fn test_render() {
        assert_eq!(QueryParam::new("a", "b").render(), "a=b");
        let bare = QueryParam {
            key: "flag".to_string(),
            value: None,
            disabled: false,
        };
        assert_eq!(bare.render(), "flag");
    }
}
