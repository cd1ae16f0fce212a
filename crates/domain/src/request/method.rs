//! HTTP Method enumeration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};

/// HTTP methods a collection request may declare.
///
/// A request without a method is a `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET method
    #[default]
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP PATCH method
    Patch,
    /// HTTP DELETE method
    Delete,
    /// HTTP COPY method
    Copy,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
    /// HTTP LINK method
    Link,
    /// HTTP UNLINK method
    Unlink,
    /// HTTP PURGE method
    Purge,
    /// HTTP LOCK method
    Lock,
    /// HTTP UNLOCK method
    Unlock,
    /// WebDAV PROPFIND method
    Propfind,
    /// HTTP VIEW method
    View,
}

impl HttpMethod {
    /// Returns all known HTTP methods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Get,
            Self::Post,
            Self::Put,
            Self::Patch,
            Self::Delete,
            Self::Copy,
            Self::Head,
            Self::Options,
            Self::Link,
            Self::Unlink,
            Self::Purge,
            Self::Lock,
            Self::Unlock,
            Self::Propfind,
            Self::View,
        ]
    }

    /// Returns the method as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Copy => "COPY",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Link => "LINK",
            Self::Unlink => "UNLINK",
            Self::Purge => "PURGE",
            Self::Lock => "LOCK",
            Self::Unlock => "UNLOCK",
            Self::Propfind => "PROPFIND",
            Self::View => "VIEW",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        let upper = s.trim().to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == upper)
            .ok_or_else(|| DomainError::UnsupportedMethod(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("POST".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
        assert_eq!("Put".parse::<HttpMethod>().unwrap(), HttpMethod::Put);
        assert_eq!(
            " propfind ".parse::<HttpMethod>().unwrap(),
            HttpMethod::Propfind
        );
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Unlink.to_string(), "UNLINK");
    }

    #[test]
    fn test_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }

    #[test]
    fn test_invalid_method() {
        let result = "INVALID".parse::<HttpMethod>();
        assert_eq!(
            result,
            Err(DomainError::UnsupportedMethod("INVALID".to_string()))
        );
    }
}
