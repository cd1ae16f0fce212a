//! HTTP Request body types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// The encoding a request body uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyMode {
    /// No body
    #[default]
    None,
    /// Raw text/JSON body
    Raw,
    /// Multipart form data
    Formdata,
    /// Form URL encoded body
    Urlencoded,
}

impl BodyMode {
    /// Returns the mode as it is spelled in collection documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Raw => "raw",
            Self::Formdata => "formdata",
            Self::Urlencoded => "urlencoded",
        }
    }
}

impl fmt::Display for BodyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyMode {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "" | "none" => Ok(Self::None),
            "raw" => Ok(Self::Raw),
            "formdata" => Ok(Self::Formdata),
            "urlencoded" => Ok(Self::Urlencoded),
            other => Err(DomainError::UnsupportedBodyMode(other.to_string())),
        }
    }
}

/// A single form field of a `formdata` or `urlencoded` body.
///
/// Disabled parameters are kept; whether to send them is up to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormParameter {
    /// The field name
    pub key: String,
    /// The field value (for file fields, the source path)
    #[serde(default)]
    pub value: String,
    /// Field kind such as `text` or `file`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    /// Whether this parameter is disabled
    #[serde(default)]
    pub disabled: bool,
}

impl FormParameter {
    /// Creates a new enabled text parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            param_type: None,
            disabled: false,
        }
    }

    /// Sets the parameter kind.
    #[must_use]
    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }

    /// Marks the parameter as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Returns true if this is a file upload field.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.param_type.as_deref() == Some("file")
    }
}

/// HTTP request body.
///
/// Exactly one payload exists, and it always matches the mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Body {
    /// No body
    #[default]
    None,
    /// Raw text payload
    Raw {
        /// The raw text
        raw: String,
    },
    /// Multipart form fields
    Formdata {
        /// The fields, in document order
        formdata: Vec<FormParameter>,
    },
    /// URL-encoded form fields
    Urlencoded {
        /// The fields, in document order
        urlencoded: Vec<FormParameter>,
    },
}

impl Body {
    /// Creates a raw text body.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Raw {
            raw: content.into(),
        }
    }

    /// Builds a body from the loose fields of a collection document.
    ///
    /// An explicit `mode` selects the payload and the other fields are dropped.
    /// Without a mode, the first populated payload wins in the order raw,
    /// formdata, urlencoded; with none populated the body is empty.
    #[must_use]
    pub fn from_parts(
        mode: Option<BodyMode>,
        raw: Option<String>,
        formdata: Option<Vec<FormParameter>>,
        urlencoded: Option<Vec<FormParameter>>,
    ) -> Self {
        let mode = mode.unwrap_or(if raw.is_some() {
            BodyMode::Raw
        } else if formdata.is_some() {
            BodyMode::Formdata
        } else if urlencoded.is_some() {
            BodyMode::Urlencoded
        } else {
            BodyMode::None
        });

        match mode {
            BodyMode::None => Self::None,
            BodyMode::Raw => Self::Raw {
                raw: raw.unwrap_or_default(),
            },
            BodyMode::Formdata => Self::Formdata {
                formdata: formdata.unwrap_or_default(),
            },
            BodyMode::Urlencoded => Self::Urlencoded {
                urlencoded: urlencoded.unwrap_or_default(),
            },
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> BodyMode {
        match self {
            Self::None => BodyMode::None,
            Self::Raw { .. } => BodyMode::Raw,
            Self::Formdata { .. } => BodyMode::Formdata,
            Self::Urlencoded { .. } => BodyMode::Urlencoded,
        }
    }

    /// Returns the raw payload, if the mode is `raw`.
    #[must_use]
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Self::Raw { raw } => Some(raw),
            _ => None,
        }
    }

    /// Returns the multipart fields, or an empty slice for other modes.
    #[must_use]
    pub fn formdata(&self) -> &[FormParameter] {
        match self {
            Self::Formdata { formdata } => formdata,
            _ => &[],
        }
    }

    /// Returns the URL-encoded fields, or an empty slice for other modes.
    #[must_use]
    pub fn urlencoded(&self) -> &[FormParameter] {
        match self {
            Self::Urlencoded { urlencoded } => urlencoded,
            _ => &[],
        }
    }

    /// Returns whether the body carries no payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Raw { raw } => raw.is_empty(),
            Self::Formdata { formdata } => formdata.is_empty(),
            Self::Urlencoded { urlencoded } => urlencoded.is_empty(),
        }
    }

    /// Returns the content type implied by the mode, if any.
    ///
    /// Raw bodies have no implied type; it comes from the request headers.
    #[must_use]
    pub const fn content_type(&self) -> Option<&'static str> {
        match self {
            Self::None | Self::Raw { .. } => None,
            Self::Formdata { .. } => Some("multipart/form-data"),
            Self::Urlencoded { .. } => Some("application/x-www-form-urlencoded"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_explicit_raw_mode() {
        let body = Body::from_parts(
            Some(BodyMode::Raw),
            Some(r#"{ "name": "test" }"#.to_string()),
            None,
            None,
        );
        assert_eq!(body.mode(), BodyMode::Raw);
        assert_eq!(body.raw_text(), Some(r#"{ "name": "test" }"#));
        assert!(body.formdata().is_empty());
        assert!(body.urlencoded().is_empty());
    }

    #[test]
    fn test_explicit_mode_drops_other_payloads() {
        let body = Body::from_parts(
            Some(BodyMode::Urlencoded),
            Some("ignored".to_string()),
            Some(vec![FormParameter::new("a", "1")]),
            Some(vec![FormParameter::new("b", "2")]),
        );
        assert_eq!(body.mode(), BodyMode::Urlencoded);
        assert_eq!(body.raw_text(), None);
        assert!(body.formdata().is_empty());
        assert_eq!(body.urlencoded(), &[FormParameter::new("b", "2")]);
    }

    #[test]
    fn test_mode_inferred_from_payload() {
        let raw = Body::from_parts(None, Some("text".to_string()), None, None);
        assert_eq!(raw.mode(), BodyMode::Raw);

        let form = Body::from_parts(None, None, Some(vec![FormParameter::new("k", "v")]), None);
        assert_eq!(form.mode(), BodyMode::Formdata);

        let encoded = Body::from_parts(None, None, None, Some(Vec::new()));
        assert_eq!(encoded.mode(), BodyMode::Urlencoded);
    }

    #[test]
    fn test_empty_body() {
        let body = Body::from_parts(None, None, None, None);
        assert_eq!(body, Body::None);
        assert!(body.is_empty());
        assert_eq!(body.content_type(), None);
    }

    #[test]
    fn test_explicit_mode_without_payload() {
        let body = Body::from_parts(Some(BodyMode::Raw), None, None, None);
        assert_eq!(body.raw_text(), Some(""));
        assert!(body.is_empty());
    }

    #[test]
    fn test_disabled_parameters_are_kept() {
        let body = Body::from_parts(
            Some(BodyMode::Formdata),
            None,
            Some(vec![
                FormParameter::new("username", "aaa"),
                FormParameter::new("debug", "1").disabled(),
            ]),
            None,
        );
        assert_eq!(body.formdata().len(), 2);
        assert!(body.formdata()[1].disabled);
        assert_eq!(body.content_type(), Some("multipart/form-data"));
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("raw".parse::<BodyMode>().unwrap(), BodyMode::Raw);
        assert_eq!("".parse::<BodyMode>().unwrap(), BodyMode::None);
        assert_eq!(
            "graphql".parse::<BodyMode>(),
            Err(DomainError::UnsupportedBodyMode("graphql".to_string()))
        );
    }

    #[test]
    fn test_serializes_with_mode_tag() {
        let json = serde_json::to_value(Body::raw("x")).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "raw", "raw": "x"}));
    }
}
