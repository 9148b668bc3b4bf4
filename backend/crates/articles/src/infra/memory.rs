//! In-Memory Repository Implementation
//!
//! HashMap behind an `RwLock`. Filtering, search, and aggregation run over
//! cloned snapshots; callers never see references into the map.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kernel::id::ArticleId;
use uuid::Uuid;

use crate::domain::entity::article::Article;
use crate::domain::repository::{
    ArticleFilter, ArticleRepository, ArticleStats, CategoryCount, PopularArticle,
};
use crate::domain::value_object::{slug::Slug, status::ArticleStatus};
use crate::error::ArticleResult;

/// In-memory article store
#[derive(Clone, Default)]
pub struct InMemoryArticleStore {
    inner: Arc<RwLock<HashMap<Uuid, Article>>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, Article>> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Article>> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn matches(article: &Article, filter: &ArticleFilter) -> bool {
    if let Some(status) = filter.status {
        if article.status != status {
            return false;
        }
    }

    if let Some(category) = filter.category {
        if article.category != category {
            return false;
        }
    }

    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        let in_title = article.title.to_lowercase().contains(&needle);
        let in_content = article
            .content
            .iter()
            .any(|p| p.to_lowercase().contains(&needle));
        let in_category = article
            .category
            .as_str()
            .to_lowercase()
            .contains(&needle);
        if !(in_title || in_content || in_category) {
            return false;
        }
    }

    true
}

impl ArticleRepository for InMemoryArticleStore {
    async fn insert(&self, article: &Article) -> ArticleResult<()> {
        self.write()
            .insert(*article.article_id.as_uuid(), article.clone());
        Ok(())
    }

    async fn find_by_id(&self, article_id: &ArticleId) -> ArticleResult<Option<Article>> {
        Ok(self.read().get(article_id.as_uuid()).cloned())
    }

    async fn find_by_slug(&self, slug: &Slug) -> ArticleResult<Option<Article>> {
        Ok(self.read().values().find(|a| a.slug == *slug).cloned())
    }

    async fn slug_taken(&self, slug: &Slug, exclude: Option<&ArticleId>) -> ArticleResult<bool> {
        Ok(self
            .read()
            .values()
            .any(|a| a.slug == *slug && Some(&a.article_id) != exclude))
    }

    async fn update(&self, article: &Article) -> ArticleResult<()> {
        self.write()
            .insert(*article.article_id.as_uuid(), article.clone());
        Ok(())
    }

    async fn delete(&self, article_id: &ArticleId) -> ArticleResult<bool> {
        Ok(self.write().remove(article_id.as_uuid()).is_some())
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        skip: u64,
        limit: u64,
    ) -> ArticleResult<(Vec<Article>, u64)> {
        let mut matched: Vec<Article> = self
            .read()
            .values()
            .filter(|a| matches(a, filter))
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect();

        Ok((page, total))
    }

    async fn stats(&self) -> ArticleResult<ArticleStats> {
        let articles = self.read();

        let total = articles.len() as i64;
        let count_status = |status: ArticleStatus| {
            articles.values().filter(|a| a.status == status).count() as i64
        };

        let mut by_category: HashMap<_, i64> = HashMap::new();
        for article in articles.values() {
            *by_category.entry(article.category).or_default() += 1;
        }
        let mut categories: Vec<CategoryCount> = by_category
            .into_iter()
            .map(|(category, count)| CategoryCount { category, count })
            .collect();
        categories.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.category.as_str().cmp(b.category.as_str()))
        });

        let mut published: Vec<&Article> = articles
            .values()
            .filter(|a| a.status == ArticleStatus::Published)
            .collect();
        published.sort_by(|a, b| b.view_count.cmp(&a.view_count));
        let popular = published
            .into_iter()
            .take(5)
            .map(|a| PopularArticle {
                article_id: a.article_id,
                title: a.title.clone(),
                slug: a.slug.clone(),
                view_count: a.view_count,
            })
            .collect();

        Ok(ArticleStats {
            total,
            published: count_status(ArticleStatus::Published),
            draft: count_status(ArticleStatus::Draft),
            archived: count_status(ArticleStatus::Archived),
            categories,
            popular,
        })
    }
}
