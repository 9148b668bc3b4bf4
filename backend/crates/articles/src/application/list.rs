//! List Articles Use Case
//!
//! Filtered, searched, paginated listing. Callers without the editor or
//! admin role only ever see published articles; a status filter they send
//! is overridden, which keeps "public listings contain only published
//! articles" true unconditionally.

use std::sync::Arc;

use accounts::domain::entity::user::User;

use crate::domain::entity::article::Article;
use crate::domain::repository::{ArticleFilter, ArticleRepository};
use crate::domain::value_object::{category::Category, status::ArticleStatus};
use crate::error::{ArticleError, ArticleResult};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// List input, straight from the query string
#[derive(Debug, Default)]
pub struct ListArticlesInput {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One page of results
pub struct ArticlePage {
    pub items: Vec<Article>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
}

/// List articles use case
pub struct ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    repo: Arc<A>,
}

impl<A> ListArticlesUseCase<A>
where
    A: ArticleRepository,
{
    pub fn new(repo: Arc<A>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        input: ListArticlesInput,
        caller: Option<&User>,
    ) -> ArticleResult<ArticlePage> {
        let privileged = caller.map(|u| u.role.is_editor_or_higher()).unwrap_or(false);

        let status = if privileged {
            input
                .status
                .as_deref()
                .map(|s| {
                    ArticleStatus::parse(s)
                        .ok_or_else(|| ArticleError::Validation("Invalid status".to_string()))
                })
                .transpose()?
        } else {
            Some(ArticleStatus::Published)
        };

        let category = input
            .category
            .as_deref()
            .map(|c| {
                Category::parse(c)
                    .ok_or_else(|| ArticleError::Validation("Invalid category".to_string()))
            })
            .transpose()?;

        let filter = ArticleFilter {
            status,
            category,
            search: input.search.filter(|s| !s.trim().is_empty()),
        };

        let page = input.page.filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = input.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        let skip = u64::from(page - 1) * u64::from(limit);

        let (items, total) = self.repo.list(&filter, skip, u64::from(limit)).await?;

        Ok(ArticlePage {
            items,
            total,
            pages: total.div_ceil(u64::from(limit)),
            current_page: page,
        })
    }
}
