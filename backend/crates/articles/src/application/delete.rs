//! Delete Article Use Case
//!
//! Only the author or an admin may delete. Editors cannot delete other
//! people's articles even though they can update them; the asymmetry is
//! intentional.

use std::sync::Arc;

use accounts::domain::entity::user::User;
use kernel::id::ArticleId;

use crate::domain::repository::ArticleRepository;
use crate::error::{ArticleError, ArticleResult};

/// Delete article use case
pub struct DeleteArticleUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> DeleteArticleUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, article_id: &ArticleId, caller: &User) -> ArticleResult<()> {
        let article = self
            .repo
            .find_by_id(article_id)
            .await?
            .ok_or(ArticleError::NotFound)?;

        if article.author_id != caller.user_id && !caller.role.is_admin() {
            return Err(ArticleError::DeleteForbidden);
        }

        self.repo.delete(article_id).await?;

        tracing::info!(
            article_id = %article_id,
            deleted_by = %caller.user_id,
            "Article deleted"
        );

        Ok(())
    }
}
