//! Article Status Value Object

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use ArticleStatus::*;
        match self {
            Draft => "draft",
            Published => "published",
            Archived => "archived",
        }
    }

    /// Parse a wire string; exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        use ArticleStatus::*;
        match s {
            "draft" => Some(Draft),
            "published" => Some(Published),
            "archived" => Some(Archived),
            _ => None,
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ArticleStatus::Draft,
            ArticleStatus::Published,
            ArticleStatus::Archived,
        ] {
            assert_eq!(ArticleStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert_eq!(ArticleStatus::parse("live"), None);
        assert_eq!(ArticleStatus::parse("Draft"), None);
    }

    #[test]
    fn test_new_articles_start_as_draft() {
        assert_eq!(ArticleStatus::default(), ArticleStatus::Draft);
    }
}
