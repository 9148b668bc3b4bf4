//! Article Entity
//!
//! A portfolio entry. Content is an ordered list of paragraphs; excerpt and
//! read time are derived from it and recomputed whenever it changes.

use chrono::{DateTime, Utc};
use kernel::id::{ArticleId, UserId};

use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};

/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 200;

/// Maximum excerpt length in characters
pub const EXCERPT_MAX_LENGTH: usize = 500;

/// Characters of the first paragraph used for a derived excerpt
const EXCERPT_SOURCE_CHARS: usize = 150;

/// Assumed reading speed for the read-time estimate
const WORDS_PER_MINUTE: usize = 200;

/// Article entity
#[derive(Debug, Clone)]
pub struct Article {
    /// Internal UUID identifier
    pub article_id: ArticleId,
    /// Display title
    pub title: String,
    /// Unique URL slug (the API's `name` field)
    pub slug: Slug,
    /// Ordered, non-empty paragraphs
    pub content: Vec<String>,
    /// Portfolio section
    pub category: Category,
    /// Visibility status
    pub status: ArticleStatus,
    /// Owning author; immutable after creation
    pub author_id: UserId,
    /// Author display name captured at creation time
    pub author_name: String,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Short preview, derived from the first paragraph unless supplied
    pub excerpt: String,
    /// Estimated reading time in minutes, at least 1
    pub read_time: i32,
    /// Monotonic view counter
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Count one view. The counter only ever grows.
    pub fn record_view(&mut self) {
        self.view_count += 1;
    }

    /// Replace the content and recompute the derived fields.
    pub fn set_content(&mut self, content: Vec<String>) {
        self.excerpt = derive_excerpt(&content);
        self.read_time = estimate_read_time(&content);
        self.content = content;
        self.updated_at = Utc::now();
    }
}

// ============================================================================
// Derivations
// ============================================================================

/// Trim paragraphs and drop the ones that end up empty.
pub fn normalize_content(content: Vec<String>) -> Vec<String> {
    content
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Trim tags and drop the ones that end up empty.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// First 150 characters of the first paragraph, plus an ellipsis.
///
/// Truncation counts characters, not bytes, so multi-byte text cannot be
/// split mid-codepoint.
pub fn derive_excerpt(content: &[String]) -> String {
    let first = content.first().map(String::as_str).unwrap_or_default();
    let mut excerpt: String = first.chars().take(EXCERPT_SOURCE_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

/// `max(1, ceil(words / 200))` where words is the whitespace-split word
/// count of the space-joined content.
pub fn estimate_read_time(content: &[String]) -> i32 {
    let words = content.join(" ").split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(words_per: &[usize]) -> Vec<String> {
        words_per
            .iter()
            .map(|n| vec!["word"; *n].join(" "))
            .collect()
    }

    #[test]
    fn test_normalize_content_drops_blank_paragraphs() {
        let content = vec![
            "  ".to_string(),
            "".to_string(),
            "real paragraph".to_string(),
        ];
        assert_eq!(normalize_content(content), vec!["real paragraph"]);
    }

    #[test]
    fn test_normalize_content_trims() {
        let content = vec!["  padded  ".to_string()];
        assert_eq!(normalize_content(content), vec!["padded"]);
    }

    #[test]
    fn test_excerpt_short_paragraph_kept_whole() {
        let excerpt = derive_excerpt(&["Hello world".to_string()]);
        assert_eq!(excerpt, "Hello world...");
    }

    #[test]
    fn test_excerpt_truncates_at_150_chars() {
        let long = "a".repeat(300);
        let excerpt = derive_excerpt(&[long]);
        assert_eq!(excerpt.chars().count(), 153);
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        // 200 multi-byte characters; byte-indexed truncation would panic
        let long = "é".repeat(200);
        let excerpt = derive_excerpt(&[long]);
        assert_eq!(excerpt.chars().count(), 153);
    }

    #[test]
    fn test_read_time_450_words_is_3_minutes() {
        assert_eq!(estimate_read_time(&paragraphs(&[450])), 3);
    }

    #[test]
    fn test_read_time_spread_across_paragraphs() {
        assert_eq!(estimate_read_time(&paragraphs(&[200, 150, 100])), 3);
    }

    #[test]
    fn test_read_time_minimum_is_1() {
        assert_eq!(estimate_read_time(&paragraphs(&[50])), 1);
        assert_eq!(estimate_read_time(&paragraphs(&[1])), 1);
    }

    #[test]
    fn test_read_time_ignores_extra_whitespace() {
        let content = vec!["one   two\t three".to_string()];
        assert_eq!(estimate_read_time(&content), 1);
    }
}
