//! Slug Value Object
//!
//! URL-safe unique identifier for an article (the `name` field of the API).
//! Input is lowercased, then validated against `[a-z0-9-]+`.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Article slug value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slug(String);

impl Slug {
    /// Create a new slug with validation
    pub fn new(slug: impl Into<String>) -> AppResult<Self> {
        let slug = slug.into().trim().to_lowercase();

        if slug.is_empty() {
            return Err(AppError::bad_request("Article name cannot be empty"));
        }

        if !slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(AppError::bad_request(
                "Article name can only contain lowercase letters, numbers, and hyphens",
            ));
        }

        Ok(Self(slug))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the slug as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Slug {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Slug::new(s)
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_valid() {
        assert!(Slug::new("my-first-article").is_ok());
        assert!(Slug::new("article-2").is_ok());
        assert!(Slug::new("2024").is_ok());
    }

    #[test]
    fn test_slug_lowercased() {
        let slug = Slug::new("My-Article").unwrap();
        assert_eq!(slug.as_str(), "my-article");
    }

    #[test]
    fn test_slug_invalid() {
        assert!(Slug::new("").is_err());
        assert!(Slug::new("   ").is_err());
        assert!(Slug::new("has spaces").is_err());
        assert!(Slug::new("under_score").is_err());
        assert!(Slug::new("dotted.name").is_err());
        assert!(Slug::new("émoji").is_err());
    }
}
