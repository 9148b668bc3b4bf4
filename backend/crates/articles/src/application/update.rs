//! Update Article Use Case
//!
//! Partial update. Absent fields stay untouched; present fields are set,
//! so an explicit empty tag list clears the tags. A content change
//! recomputes the excerpt and read time.

use std::sync::Arc;

use accounts::domain::entity::user::User;
use chrono::Utc;
use kernel::id::ArticleId;

use crate::domain::entity::article::{
    Article, TITLE_MAX_LENGTH, normalize_content, normalize_tags,
};
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::{category::Category, slug::Slug, status::ArticleStatus};
use crate::error::{ArticleError, ArticleResult};

/// Update patch; `None` fields are left alone
#[derive(Debug, Default)]
pub struct UpdateArticleInput {
    pub title: Option<String>,
    pub name: Option<String>,
    pub content: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Update article use case
pub struct UpdateArticleUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> UpdateArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        article_id: &ArticleId,
        input: UpdateArticleInput,
        caller: &User,
    ) -> ArticleResult<Article> {
        let mut article = self
            .repo
            .find_by_id(article_id)
            .await?
            .ok_or(ArticleError::NotFound)?;

        // Authors may edit their own work; editors and admins may edit any
        if article.author_id != caller.user_id && !caller.role.is_editor_or_higher() {
            return Err(ArticleError::UpdateForbidden);
        }

        if let Some(name) = input.name {
            let slug =
                Slug::new(name).map_err(|e| ArticleError::Validation(e.message().to_string()))?;
            if slug != article.slug {
                if self.repo.slug_taken(&slug, Some(article_id)).await? {
                    return Err(ArticleError::SlugTaken);
                }
                article.slug = slug;
            }
        }

        if let Some(title) = input.title {
            if title.trim().is_empty() {
                return Err(ArticleError::Validation(
                    "Title cannot be empty".to_string(),
                ));
            }
            if title.chars().count() > TITLE_MAX_LENGTH {
                return Err(ArticleError::Validation(
                    "Title cannot exceed 200 characters".to_string(),
                ));
            }
            article.title = title;
        }

        if let Some(content) = input.content {
            let content = normalize_content(content);
            if content.is_empty() {
                return Err(ArticleError::Validation(
                    "Content cannot be empty".to_string(),
                ));
            }
            article.set_content(content);
        }

        if let Some(category) = input.category {
            article.category = Category::parse(&category)
                .ok_or_else(|| ArticleError::Validation("Invalid category".to_string()))?;
        }

        if let Some(status) = input.status {
            article.status = ArticleStatus::parse(&status)
                .ok_or_else(|| ArticleError::Validation("Invalid status".to_string()))?;
        }

        if let Some(tags) = input.tags {
            // An explicit empty list clears the tags
            article.tags = normalize_tags(tags);
        }

        article.updated_at = Utc::now();
        self.repo.update(&article).await?;

        tracing::info!(
            article_id = %article.article_id,
            editor = %caller.user_id,
            "Article updated"
        );

        Ok(article)
    }
}
