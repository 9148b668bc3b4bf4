//! Article Stats Use Case
//!
//! Dashboard aggregates. The router guard restricts this to editors and
//! admins.

use std::sync::Arc;

use crate::domain::repository::{ArticleRepository, ArticleStats};
use crate::error::ArticleResult;

/// Article stats use case
pub struct ArticleStatsUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> ArticleStatsUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> ArticleResult<ArticleStats> {
        self.repo.stats().await
    }
}
