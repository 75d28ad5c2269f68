//! Application-relative route paths.
//!
//! Routes are plain path strings handed to whatever router the host
//! application supplies. `RoutePath` only guarantees the shape of the string;
//! whether a screen exists at that path is the router's business.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::result::Result;

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    pub const SETTINGS: &str = "/settings";
    pub const CARDS: &str = "/cards";
    pub const SHARING: &str = "/sharing";
    pub const CONNECTIONS: &str = "/connections";
}

/// A validated, application-relative navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePath(Cow<'static, str>);

impl RoutePath {
    /// Wraps a compile-time literal without validation.
    ///
    /// Only for the constants in [`routes`]; their shape is covered by tests.
    #[must_use]
    pub const fn from_static(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Parse a runtime path string.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidRoute` if the path is empty, is not rooted at
    /// `/`, contains whitespace, or contains an empty segment (`//`).
    pub fn parse(path: impl Into<String>) -> Result<Self> {
        let path = path.into();

        if path.is_empty() {
            return Err(Error::invalid_route(path, "path is empty"));
        }
        if !path.starts_with('/') {
            return Err(Error::invalid_route(path, "must start with '/'"));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(Error::invalid_route(path, "contains whitespace"));
        }
        if path.contains("//") {
            return Err(Error::invalid_route(path, "contains an empty segment"));
        }

        Ok(Self(Cow::Owned(path)))
    }

    /// The settings screen, reachable from the header.
    #[must_use]
    pub const fn settings() -> Self {
        Self::from_static(routes::SETTINGS)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RoutePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoutePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<RoutePath> for String {
    fn from(route: RoutePath) -> Self {
        route.0.into_owned()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_route_constants() {
        assert_eq!(routes::HOME, "/");
        assert_eq!(routes::SETTINGS, "/settings");
        assert_eq!(routes::CARDS, "/cards");
        assert_eq!(routes::SHARING, "/sharing");
        assert_eq!(routes::CONNECTIONS, "/connections");
    }

    #[test]
    fn test_route_constants_parse_cleanly() {
        for path in [
            routes::HOME,
            routes::SETTINGS,
            routes::CARDS,
            routes::SHARING,
            routes::CONNECTIONS,
        ] {
            let parsed = RoutePath::parse(path).unwrap();
            assert_eq!(parsed, RoutePath::from_static(path));
        }
    }

    #[test]
    fn test_parse_rejects_relative_path() {
        let err = RoutePath::parse("cards").unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_parse_rejects_empty_and_whitespace() {
        assert!(RoutePath::parse("").is_err());
        assert!(RoutePath::parse("/my cards").is_err());
        assert!(RoutePath::parse("/cards//edit").is_err());
    }

    #[test]
    fn test_static_and_owned_compare_equal() {
        let owned = RoutePath::parse(String::from("/settings")).unwrap();
        assert_eq!(owned, RoutePath::settings());
        assert_eq!(owned.to_string(), "/settings");
    }

    #[test]
    fn test_serde_validates_on_deserialize() {
        let ok: RoutePath = serde_json::from_str("\"/sharing\"").unwrap();
        assert_eq!(ok.as_str(), "/sharing");

        let bad: std::result::Result<RoutePath, _> = serde_json::from_str("\"sharing\"");
        assert!(bad.is_err());
    }
}
