//! Category Value Object
//!
//! Fixed set of portfolio sections. The wire strings keep the original
//! mixed casing (`general` vs `Projects`) because published URLs and
//! stored rows already use them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    General,
    Projects,
    Certifications,
    Achievements,
    Community,
    Events,
}

impl Category {
    /// All categories, for iteration in stats
    pub const ALL: [Category; 6] = [
        Category::General,
        Category::Projects,
        Category::Certifications,
        Category::Achievements,
        Category::Community,
        Category::Events,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use Category::*;
        match self {
            General => "general",
            Projects => "Projects",
            Certifications => "Certifications",
            Achievements => "Achievements",
            Community => "Community",
            Events => "Events",
        }
    }

    /// Parse a wire string; exact match only.
    pub fn parse(s: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_category_parse_is_exact() {
        assert_eq!(Category::parse("projects"), None);
        assert_eq!(Category::parse("GENERAL"), None);
        assert_eq!(Category::parse("unknown"), None);
    }

    #[test]
    fn test_category_default() {
        assert_eq!(Category::default(), Category::General);
    }
}
