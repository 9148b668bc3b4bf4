//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::application::ArticlePage;
use crate::domain::entity::article::Article;
use crate::domain::repository::{ArticleStats, CategoryCount, PopularArticle};

// ============================================================================
// Queries and requests
// ============================================================================

/// Query string for GET /api/articles
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArticlesQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// Create request. Required fields are options so the use case can answer
/// missing values with its own 400.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub name: Option<String>,
    pub content: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
    pub excerpt: Option<String>,
}

/// Update request; absent fields are left untouched
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub name: Option<String>,
    pub content: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

// ============================================================================
// Article views
// ============================================================================

/// Article as exposed by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    /// URL slug
    pub name: String,
    pub content: Vec<String>,
    pub category: String,
    pub status: String,
    pub author: String,
    pub author_name: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub read_time: i32,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Article> for ArticleDto {
    fn from(article: &Article) -> Self {
        Self {
            id: article.article_id.to_string(),
            title: article.title.clone(),
            name: article.slug.to_string(),
            content: article.content.clone(),
            category: article.category.to_string(),
            status: article.status.to_string(),
            author: article.author_id.to_string(),
            author_name: article.author_name.clone(),
            tags: article.tags.clone(),
            excerpt: article.excerpt.clone(),
            read_time: article.read_time,
            view_count: article.view_count,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Paged list response. This endpoint carries its pagination fields at the
/// top level next to the envelope flag.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
    pub data: Vec<ArticleDto>,
}

impl From<ArticlePage> for ArticleListResponse {
    fn from(page: ArticlePage) -> Self {
        let data: Vec<ArticleDto> = page.items.iter().map(ArticleDto::from).collect();
        Self {
            success: true,
            count: data.len(),
            total: page.total,
            pages: page.pages,
            current_page: page.current_page,
            data,
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCountDto {
    pub category: String,
    pub count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularArticleDto {
    pub id: String,
    pub title: String,
    pub name: String,
    pub view_count: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStatsDto {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub archived: i64,
    pub categories: Vec<CategoryCountDto>,
    pub popular: Vec<PopularArticleDto>,
}

impl From<&ArticleStats> for ArticleStatsDto {
    fn from(stats: &ArticleStats) -> Self {
        Self {
            total: stats.total,
            published: stats.published,
            draft: stats.draft,
            archived: stats.archived,
            categories: stats
                .categories
                .iter()
                .map(|c: &CategoryCount| CategoryCountDto {
                    category: c.category.to_string(),
                    count: c.count,
                })
                .collect(),
            popular: stats
                .popular
                .iter()
                .map(|p: &PopularArticle| PopularArticleDto {
                    id: p.article_id.to_string(),
                    title: p.title.clone(),
                    name: p.slug.to_string(),
                    view_count: p.view_count,
                })
                .collect(),
        }
    }
}
