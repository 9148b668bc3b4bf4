//! Repository Trait
//!
//! Interface for article persistence plus the read models the stats
//! endpoint aggregates. Implementations live in the infrastructure layer.

use kernel::id::ArticleId;

use crate::domain::entity::article::Article;
use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
use crate::error::ArticleResult;

/// Listing filter. `search` matches title, any paragraph, or the category
/// name, case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub status: Option<ArticleStatus>,
    pub category: Option<Category>,
    pub search: Option<String>,
}

/// Article count for one category
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub category: Category,
    pub count: i64,
}

/// Summary of a frequently viewed article
#[derive(Debug, Clone)]
pub struct PopularArticle {
    pub article_id: ArticleId,
    pub title: String,
    pub slug: Slug,
    pub view_count: i64,
}

/// Aggregates for the dashboard
#[derive(Debug, Clone)]
pub struct ArticleStats {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub archived: i64,
    /// Sorted by count, descending
    pub categories: Vec<CategoryCount>,
    /// Top five published articles by view count, descending
    pub popular: Vec<PopularArticle>,
}

/// Article repository trait
#[trait_variant::make(ArticleRepository: Send)]
pub trait LocalArticleRepository {
    /// Persist a new article
    async fn insert(&self, article: &Article) -> ArticleResult<()>;

    /// Find article by ID
    async fn find_by_id(&self, article_id: &ArticleId) -> ArticleResult<Option<Article>>;

    /// Find article by slug
    async fn find_by_slug(&self, slug: &Slug) -> ArticleResult<Option<Article>>;

    /// Check whether a slug is used by an article other than `exclude`
    async fn slug_taken(&self, slug: &Slug, exclude: Option<&ArticleId>) -> ArticleResult<bool>;

    /// Update an article in place
    async fn update(&self, article: &Article) -> ArticleResult<()>;

    /// Delete an article; returns whether a record was removed
    async fn delete(&self, article_id: &ArticleId) -> ArticleResult<bool>;

    /// Page through articles matching the filter, newest first.
    /// Returns the page plus the total match count.
    async fn list(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> ArticleResult<(Vec<Article>, u64)>;

    /// Aggregate counts for the dashboard
    async fn stats(&self) -> ArticleResult<ArticleStats>;
}
