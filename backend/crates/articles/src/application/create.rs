//! Create Article Use Case
//!
//! The router guard already requires an editor or admin caller; this use
//! case still validates the payload itself.

use std::sync::Arc;

use accounts::domain::entity::user::User;
use chrono::Utc;
use kernel::id::ArticleId;

use crate::domain::entity::article::{
    Article, EXCERPT_MAX_LENGTH, TITLE_MAX_LENGTH, derive_excerpt, estimate_read_time,
    normalize_content, normalize_tags,
};
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
use crate::error::{ArticleError, ArticleResult};

/// Create input. Required fields are options so missing values produce the
/// validation error instead of a deserialization failure.
#[derive(Debug, Default)]
pub struct CreateArticleInput {
    pub title: Option<String>,
    pub name: Option<String>,
    pub content: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub excerpt: Option<String>,
}

/// Create article use case
pub struct CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> CreateArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: CreateArticleInput,
        caller: &User,
    ) -> ArticleResult<Article> {
        let title = match input.title {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(ArticleError::MissingFields),
        };
        let name = match input.name {
            Some(n) if !n.trim().is_empty() => n,
            _ => return Err(ArticleError::MissingFields),
        };
        let content = match input.content {
            Some(c) if !c.is_empty() => c,
            _ => return Err(ArticleError::MissingFields),
        };

        let content = normalize_content(content);
        if content.is_empty() {
            return Err(ArticleError::MissingFields);
        }

        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(ArticleError::Validation(
                "Title cannot exceed 200 characters".to_string(),
            ));
        }

        let slug =
            Slug::new(name).map_err(|e| ArticleError::Validation(e.message().to_string()))?;

        let category = input
            .category
            .as_deref()
            .map(|c| {
                Category::parse(c)
                    .ok_or_else(|| ArticleError::Validation("Invalid category".to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let status = input
            .status
            .as_deref()
            .map(|s| {
                ArticleStatus::parse(s)
                    .ok_or_else(|| ArticleError::Validation("Invalid status".to_string()))
            })
            .transpose()?
            .unwrap_or_default();

        let excerpt = match input.excerpt.filter(|e| !e.trim().is_empty()) {
            Some(e) => {
                if e.chars().count() > EXCERPT_MAX_LENGTH {
                    return Err(ArticleError::Validation(
                        "Excerpt cannot exceed 500 characters".to_string(),
                    ));
                }
                e
            }
            None => derive_excerpt(&content),
        };

        // Check-then-insert: two concurrent creates with the same slug can
        // both pass this check. The unique index is the backstop.
        if self.repo.slug_taken(&slug, None).await? {
            return Err(ArticleError::SlugTaken);
        }

        let now = Utc::now();
        let article = Article {
            article_id: ArticleId::new(),
            title,
            slug,
            read_time: estimate_read_time(&content),
            content,
            category,
            status,
            author_id: caller.user_id,
            author_name: caller.full_name.clone(),
            tags: normalize_tags(input.tags.unwrap_or_default()),
            excerpt,
            view_count: 0,
            created_at: now,
            updated_at: now,
        };

        self.repo.insert(&article).await?;

        tracing::info!(
            article_id = %article.article_id,
            slug = %article.slug,
            author = %article.author_id,
            "Article created"
        );

        Ok(article)
    }
}
