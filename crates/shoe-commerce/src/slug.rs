//! URL slug newtype for listings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ListingError, Result};

/// A URL-safe listing slug (e.g., `"tree-runner-go"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap a slug.
    ///
    /// Slugs are non-empty and limited to ASCII letters, digits, `-` and `_`.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(ListingError::invalid("slug is empty"));
        }
        if let Some(bad) = raw
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(ListingError::invalid(format!(
                "slug {:?} contains invalid character {:?}",
                raw, bad
            )));
        }
        Ok(Self(raw))
    }

    /// Get the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Navigation target under `prefix` (e.g., `/shoe/tree-runner-go`).
    pub fn href(&self, prefix: &str) -> String {
        format!("{}/{}", prefix.trim_end_matches('/'), self.0)
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = ListingError;

    fn try_from(s: String) -> Result<Self> {
        Slug::parse(s)
    }
}

impl TryFrom<&str> for Slug {
    type Error = ListingError;

    fn try_from(s: &str) -> Result<Self> {
        Slug::parse(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
