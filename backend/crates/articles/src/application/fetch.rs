//! Get Article Use Case
//!
//! Slug-addressed read. Every successful read increments the view counter
//! and persists it, so reads are deliberately non-idempotent. The
//! increment is a read-modify-write without a transaction; concurrent
//! reads can lose an update, which is tolerated at this scale.

use std::sync::Arc;

use accounts::domain::entity::user::User;

use crate::domain::entity::article::Article;
use crate::domain::repository::ArticleRepository;
use crate::domain::value_object::{slug::Slug, status::ArticleStatus};
use crate::error::{ArticleError, ArticleResult};

/// Get article use case
pub struct GetArticleUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> GetArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, name: &str, caller: Option<&User>) -> ArticleResult<Article> {
        // A name that cannot be a slug cannot match anything
        let slug = match Slug::new(name) {
            Ok(slug) => slug,
            Err(_) => return Err(ArticleError::NotFound),
        };

        let mut article = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or(ArticleError::NotFound)?;

        if article.status != ArticleStatus::Published {
            let privileged = caller.map(|u| u.role.is_editor_or_higher()).unwrap_or(false);
            if !privileged {
                return Err(ArticleError::NotAvailable);
            }
        }

        article.record_view();
        self.repo.update(&article).await?;

        Ok(article)
    }
}
